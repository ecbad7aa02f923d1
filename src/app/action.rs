/// User intents against an open setup dialog, delivered sequentially by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    Confirm,
    Cancel,
}
