use std::sync::Arc;

use crate::catalog::{InfoPage, Institution};

/// What a control does when it is clicked.
#[derive(Clone, Debug)]
pub enum Action {
    ShowMenu,
    ShowDetail(Arc<Institution>),
    ShowInfo(InfoPage),
    /// Hand the URL to the system browser; the current scene stays.
    OpenLink(String),
    Exit,
}
