#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION MESSAGES ===
    AppTitle,
    PressEnterToStop,
    TrackingInterrupted,

    // === CONFIGURATION MESSAGES ===
    ApiKeyMissing,
    ConfigParseError(String), // error
    ConfigLoaded(String),     // path

    // === WORKSPACE MESSAGES ===
    PromptChooseWorkspace,
    NoWorkspacesFound,
    WorkspaceNotFound(usize),          // row
    WorkspaceSelected(String, String), // name, id
    WorkspaceFetchFailed(String),      // error

    // === PROJECT MESSAGES ===
    PromptChooseProject,
    PromptProjectName,
    CreateNewProjectOption,
    CreatedProjectNote,
    ProjectNotFound(usize),          // row
    ProjectSelected(String, String), // name, id
    ProjectCreated(String),          // name
    ProjectCreateFailed(String),     // error
    ProjectFetchFailed(String),      // error

    // === TAG MESSAGES ===
    TagReused(String, String),  // name, id
    TagCreated(String, String), // name, id
    TagFetchFailed(String),     // error
    TagCreateFailed(String),    // error

    // === SESSION MESSAGES ===
    PromptWorkNote,
    SummaryTimer(String), // H:M:S while tracking
    PromptSaveOrDiscard,
    SaveOption,
    DiscardOption,
    PromptKeepOrChangeNote,
    KeepNoteOption,
    ChangeNoteOption,
    DiscardingTimeEntry,
    TimeEntrySaved,
    TimeEntrySaveFailed(String),     // error
    SubmitInterrupted,
    TimeEntryResponseBody(String),   // response body
}
