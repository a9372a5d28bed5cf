use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which files a check run covers.
///
/// `MainSources` is the default: new installations check production code
/// only until the user widens the scope.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScanScope {
    /// Every file in the project, including non-source files.
    Everything,
    /// Every file under any registered source root.
    AllSources,
    /// Production source roots only.
    #[default]
    MainSources,
    /// Production and test source roots.
    MainSourcesWithTests,
}

impl ScanScope {
    /// Label shown in the settings UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ScanScope::Everything => "All files in the project",
            ScanScope::AllSources => "All files under a source root",
            ScanScope::MainSources => "Main source files only",
            ScanScope::MainSourcesWithTests => "Main and test source files",
        }
    }

    pub fn includes_tests(&self) -> bool {
        matches!(
            self,
            ScanScope::Everything | ScanScope::AllSources | ScanScope::MainSourcesWithTests
        )
    }
}
