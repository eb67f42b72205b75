//! Filter expressions for the workspace search collaborator.

use std::fmt;

/// Which workspaces to fetch for a dormancy preview.
///
/// Renders as `template:<name>`, with ` dormant:true` appended when only
/// dormant workspaces are wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceQuery {
    pub template: String,
    pub dormant_only: bool,
}

impl WorkspaceQuery {
    /// Candidates for [`going_dormant`](super::going_dormant).
    pub fn dormancy_candidates(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            dormant_only: false,
        }
    }

    /// Candidates for [`going_to_be_deleted`](super::going_to_be_deleted).
    pub fn deletion_candidates(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            dormant_only: true,
        }
    }
}

impl fmt::Display for WorkspaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template:{}", self.template)?;
        if self.dormant_only {
            f.write_str(" dormant:true")?;
        }
        Ok(())
    }
}
