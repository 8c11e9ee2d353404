/// How record keys are assigned in the record store.
///
/// `Fixed` writes every submission under one well-known key, so the latest
/// submission overwrites the previous one and the home page shows at most a
/// single record. `Generated` assigns a fresh UUID per submission and the
/// store accumulates history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum IdMode {
    Fixed,
    Generated,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub bucket: String,
    pub storage_endpoint: Option<String>,
    pub language_api_url: String,
    pub language_api_key: Option<String>,
    pub id_mode: IdMode,
}
