#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub name: Option<String>,
    pub pet: Option<String>,
    pub identity: Option<String>,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Raw field values, missing ones as empty strings.
    pub fn inputs(&self) -> (&str, &str, &str) {
        (
            self.name.as_deref().unwrap_or(""),
            self.pet.as_deref().unwrap_or(""),
            self.identity.as_deref().unwrap_or(""),
        )
    }
}
