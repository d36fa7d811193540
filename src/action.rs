use crate::catalog::RawPage;
use crate::error::DexError;
use crate::types::PokemonDetail;

#[derive(Debug)]
pub enum Action {
    Quit,
    ScrollUp,
    ScrollDown,

    /// Open the detail panel for the highlighted record.
    Select,
    HideDetail,

    /// Fetch the next catalog page. A no-op once the catalog is exhausted
    /// or while a page fetch is already in flight.
    LoadNextPage,
    PageLoaded(RawPage),

    DetailLoaded(Box<PokemonDetail>),

    Error(String),
    None,
}

impl From<DexError> for Action {
    fn from(err: DexError) -> Self {
        Action::Error(err.to_string())
    }
}
