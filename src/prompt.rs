// SPDX-License-Identifier: AGPL-3.0-or-later
//! Interactive collection of missing cluster inputs
//!
//! The prompter only gathers answers. Validation happens in
//! [`ClusterSpec::new`], so the generator never sees unchecked input.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cluster::ClusterSpec;
use crate::config::ClusterInputs;
use crate::error::{ContactError, Result};

const NAMESPACE_0_PROMPT: &str =
    "Enter the Kubernetes cluster namespace where Camunda 8 is installed, in region 0: ";
const NAMESPACE_1_PROMPT: &str =
    "Enter the Kubernetes cluster namespace where Camunda 8 is installed, in region 1: ";
const RELEASE_PROMPT: &str =
    "Enter Helm release name used for installing Camunda 8 in both Kubernetes clusters: ";
const CLUSTER_SIZE_PROMPT: &str =
    "Enter Zeebe cluster size (total number of Zeebe brokers in both Kubernetes clusters): ";

/// Asks for values on `output` and reads answers line by line from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every field `inputs` leaves unset, then validate the result
    pub fn complete(&mut self, inputs: ClusterInputs) -> Result<ClusterSpec> {
        let namespace_0 = match inputs.namespace_0 {
            Some(value) => value,
            None => self.ask(NAMESPACE_0_PROMPT, "namespace for region 0")?,
        };
        let namespace_1 = match inputs.namespace_1 {
            Some(value) => value,
            None => self.ask(NAMESPACE_1_PROMPT, "namespace for region 1")?,
        };
        let release = match inputs.release {
            Some(value) => value,
            None => self.ask(RELEASE_PROMPT, "Helm release name")?,
        };
        let cluster_size = match inputs.cluster_size {
            Some(value) => value,
            None => {
                let answer = self.ask(CLUSTER_SIZE_PROMPT, "cluster size")?;
                answer
                    .parse::<u32>()
                    .map_err(|error| ContactError::InvalidInput {
                        field: "cluster size",
                        message: format!("'{}' is not a whole number ({})", answer, error),
                    })?
            }
        };

        Ok(ClusterSpec::new(namespace_0, namespace_1, release, cluster_size)?)
    }

    fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ContactError::UnexpectedEof { field });
        }

        let answer = line.trim().to_string();
        debug!(field, answer = %answer, "Read interactive answer");
        Ok(answer)
    }
}
