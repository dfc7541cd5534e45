/// Runtime configuration. `BOOKRACK_BOOKS` points at a local catalog
/// document; without it the bundled one is used.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub book_list_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            book_list_path: std::env::var("BOOKRACK_BOOKS")
                .ok()
                .filter(|path| !path.is_empty()),
        }
    }
}
