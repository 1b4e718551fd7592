/// Example program to print the effective launcher configuration
///
/// Run with: cargo run -p kiosk-config --example print_config

fn main() {
    let config = kiosk_config::KioskConfig::load();

    println!("=== Feria Launcher Configuration ===\n");
    println!("Config file: {}", kiosk_config::KioskConfig::config_path().display());
    println!();

    println!("Window:");
    println!("  Title: {}", config.window.title);
    println!("  Size: {}x{}", config.window.width, config.window.height);
    println!("  FPS: {}", config.window.fps);
    println!();

    println!("Text:");
    println!("  Font: {:?}", config.text.font);
    println!("  Bold Font: {:?}", config.text.bold_font);
    println!();

    println!("Institutions:");
    for inst in &config.institutions {
        println!("  {} -> {}", inst.name, inst.url);
    }
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
