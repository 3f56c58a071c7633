use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown dispatch policy {0:?}: expected \"random\", \"pushy\", or \"short_sighted\"")]
    UnknownPolicy(String),
}
