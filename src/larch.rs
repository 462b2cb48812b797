use crate::error::ListError;

/// Whether the loop driving an application should keep going.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Status {
    Running,
    Quit,
}

/// An interactive program written as a minimal Larch application, Larch
/// being a flavor of the Elm Architecture for CLI/TUI.
pub trait LarchMinimal {
    /// Startup configuration, perhaps persisted state loaded before the loop.
    type Flags;
    /// The state of the application
    type Model;
    /// Something that causes an update to the model
    type Msg;
    /// How the model is translated into a view
    type View;

    fn init(flags: Self::Flags) -> Self::Model;
    fn update(&mut self, msg: Self::Msg, model: &mut Self::Model) -> Result<Status, ListError>;
    fn view(model: &Self::Model) -> Self::View;
}
