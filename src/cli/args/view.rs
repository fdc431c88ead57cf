//! Response viewer selection arguments

use clap::Args;

use super::TabArg;
use crate::render::ViewState;

/// Initial response/tab selection.
///
/// Flatten this into commands that show a response panel:
/// ```ignore
/// Render {
///     #[command(flatten)]
///     view: ViewArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Response index to select (0 = first response)
    #[arg(long, short = 'r')]
    pub response: Option<usize>,

    /// Tab to select within the response
    #[arg(long, short = 't', value_enum)]
    pub tab: Option<TabArg>,
}

impl ViewArgs {
    /// Selection to apply, starting from the `(0, RESPONSE)` default
    pub fn to_state(&self) -> ViewState {
        ViewState {
            response: self.response.unwrap_or(0),
            tab: self.tab.map(Into::into).unwrap_or_default(),
        }
    }

    /// Whether any selection flag was given
    pub fn is_set(&self) -> bool {
        self.response.is_some() || self.tab.is_some()
    }
}
