// SPDX-License-Identifier: AGPL-3.0-or-later
//! Output rendering for contact lists
//!
//! The list ends up as an environment variable of the Zeebe brokers in the
//! base Camunda Helm chart values file, either pasted by hand from the
//! printed block or substituted into a values file template.

use serde::{Deserialize, Serialize};

use crate::cluster::ContactList;
use crate::error::{ContactError, Result};

/// Environment variable read by every Zeebe broker
pub const INITIAL_CONTACT_POINTS_ENV: &str = "ZEEBE_BROKER_CLUSTER_INITIALCONTACTPOINTS";

/// Output format for `generate`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Helm `env` entry with usage hint
    #[default]
    Helm,
    /// The bare comma-separated list
    Value,
    /// JSON object with `name` and `value`
    Json,
}

#[derive(Debug, Serialize)]
struct EnvVar<'a> {
    name: &'a str,
    value: String,
}

/// Render `list` in the requested format, newline-terminated
pub fn render(list: &ContactList, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Helm => format!(
            "\nPlease use the following to set the environment variable {env} \
             in the base Camunda Helm chart values file.\n\
             \n\
             - name: {env}\n  value: {list}\n",
            env = INITIAL_CONTACT_POINTS_ENV,
        ),
        OutputFormat::Value => format!("{list}\n"),
        OutputFormat::Json => {
            let env_var = EnvVar {
                name: INITIAL_CONTACT_POINTS_ENV,
                value: list.to_string(),
            };
            format!("{}\n", serde_json::to_string_pretty(&env_var)?)
        }
    };

    Ok(rendered)
}

/// Replace every `placeholder` in a values file body with the contact list
///
/// # Arguments
///
/// * `template` - Contents of the values file
/// * `placeholder` - Marker to replace
/// * `list` - Contact list to insert
/// * `source` - Name of the values file, used in the error message
pub fn fill_placeholder(
    template: &str,
    placeholder: &str,
    list: &ContactList,
    source: &str,
) -> Result<String> {
    if placeholder.is_empty() || !template.contains(placeholder) {
        return Err(ContactError::PlaceholderNotFound {
            placeholder: placeholder.to_string(),
            path: source.to_string(),
        });
    }

    Ok(template.replace(placeholder, &list.to_string()))
}
