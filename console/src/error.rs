use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error(transparent)]
    Api(#[from] fc_api::ApiError),
    #[error("failed to convert form state: {0}")]
    State(#[from] form_state::Error),
    #[error("nothing is loaded on this screen")]
    NothingLoaded,
    /// Save was attempted while the form has validation errors.
    #[error("form has unresolved errors: {0:?}")]
    Invalid(form_state::ErrorMap),
}
