use thiserror::Error;

/// Terminal failures of one prediction cycle. Each is shown to the user in
/// place of the result card; none is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// The day's file could not be retrieved (missing, network failure, HTTP error)
    #[error(
        "Could not load predictions file for date {date}. \
         Please ensure the file exists in the predictions folder. ({path}: {reason})"
    )]
    Fetch {
        date: String,
        path: String,
        reason: String,
    },

    /// The file was retrieved but is not readable CSV
    #[error("Error parsing prediction data: {0}")]
    Parse(String),

    /// The file parsed to zero data rows
    #[error("No prediction data found")]
    EmptyResult,

    /// The data task panicked
    #[error("Prediction task failed: {0}")]
    Task(String),
}
