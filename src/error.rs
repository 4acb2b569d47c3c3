/// Seeder kinds of error.
#[derive(Debug, Clone, PartialEq)]
pub enum SeederErrorKind {
    ConfigurationInvalid,
    EntropyTypeInvalid,
    LanguageUnsupported,
    SeedMissing,
    SeedInvalid,
    Other,
}


/// Seeder error structure. It supports converting into `std::io::Error`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeederError {
    kind: SeederErrorKind,
    message: String,
}


impl SeederError {
    /// Create a new seeder error instance.
    pub fn new(kind: SeederErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Get kind of the error.
    pub fn kind(&self) -> SeederErrorKind {
        self.kind.clone()
    }
}


impl std::fmt::Display for SeederError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}


impl std::error::Error for SeederError {}


impl From<SeederErrorKind> for SeederError {
    fn from(seeder_error_kind: SeederErrorKind) -> SeederError {
        let message = format!("{:?}", seeder_error_kind);
        SeederError::new(seeder_error_kind, message)
    }
}


impl From<SeederError> for std::io::Error {
    fn from(seeder_error: SeederError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, seeder_error.to_string())
    }
}


impl From<SeederErrorKind> for std::io::Error {
    fn from(seeder_error_kind: SeederErrorKind) -> std::io::Error {
        let seeder_error = SeederError::from(seeder_error_kind);
        seeder_error.into()
    }
}
