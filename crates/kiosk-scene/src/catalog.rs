use std::path::Path;
use std::sync::Arc;

use kiosk_config::{InstitutionConfig, KioskConfig};
use kiosk_core::{Color, DEFAULT_FALLBACK_COLOR, Image, ImageProvider};

use crate::theme::Theme;

/// Size institution images are scaled to.
pub const CARD_IMAGE_SIZE: (u32, u32) = (160, 160);
pub const SPLASH_LOGO_SIZE: (u32, u32) = (223, 220);
pub const SPLASH_LOGO_FALLBACK: Color = Color::rgb(30, 30, 50);

#[derive(Clone, Debug)]
pub struct Institution {
    pub name: String,
    pub area: String,
    pub summary: String,
    pub url: String,
    pub image: Image,
}

impl Institution {
    pub fn from_config(cfg: &InstitutionConfig, images: &mut ImageProvider) -> Self {
        Self {
            name: cfg.name.clone(),
            area: cfg.area.clone(),
            summary: cfg.summary.clone(),
            url: cfg.url.clone(),
            image: images.load(&cfg.image, Some(CARD_IMAGE_SIZE), DEFAULT_FALLBACK_COLOR),
        }
    }
}

/// Static text page, optionally linking somewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoPage {
    pub title: String,
    pub body: String,
    pub url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SplashContent {
    pub title: String,
    pub subtitle: String,
    pub logo: Image,
    /// Seconds before the menu replaces the splash screen.
    pub duration: f32,
}

/// Institutions in card order. Shared by reference with every scene.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    institutions: Vec<Arc<Institution>>,
}

impl Catalog {
    pub fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions: institutions.into_iter().map(Arc::new).collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Institution>> {
        self.institutions.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Arc<Institution>> {
        self.institutions.iter().find(|i| i.name == name)
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }
}

/// Everything scenes are built from. Immutable once the launcher starts.
#[derive(Clone, Debug)]
pub struct Content {
    pub theme: Theme,
    pub catalog: Catalog,
    pub about: InfoPage,
    pub splash: SplashContent,
}

impl Content {
    /// Resolve the configuration into scene content, loading every image up
    /// front. Missing images become placeholders.
    pub fn from_config(config: &KioskConfig, images: &mut ImageProvider) -> Self {
        let catalog = Catalog::new(
            config
                .institutions
                .iter()
                .map(|cfg| Institution::from_config(cfg, images))
                .collect(),
        );
        let splash = SplashContent {
            title: config.splash.title.clone(),
            subtitle: config.splash.subtitle.clone(),
            logo: images.load(
                Path::new(&config.assets.splash_logo),
                Some(SPLASH_LOGO_SIZE),
                SPLASH_LOGO_FALLBACK,
            ),
            duration: config.splash.duration_secs,
        };
        let about = InfoPage {
            title: config.about.title.clone(),
            body: config.about.body.clone(),
            url: config.about.url.clone(),
        };
        log::info!("loaded {} institutions", catalog.len());
        Self { theme: Theme::from_config(config), catalog, about, splash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_uses_placeholders_when_assets_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut images = ImageProvider::new(dir.path());
        let content = Content::from_config(&KioskConfig::default(), &mut images);

        assert_eq!(content.catalog.len(), 3);
        let uvm = content.catalog.find("UVM").unwrap();
        assert_eq!(uvm.url, "https://uvm.mx/");
        assert!(uvm.image.is_placeholder());
        assert_eq!((uvm.image.width(), uvm.image.height()), CARD_IMAGE_SIZE);
        assert_eq!((content.splash.logo.width(), content.splash.logo.height()), SPLASH_LOGO_SIZE);
        assert!(content.about.url.is_none());
    }
}
