use dialoguer::MultiSelect;
use snafu::{OptionExt, ResultExt};
use tokio::task;

use crate::error::{CancelledSnafu, PromptSnafu, Result, join_error};

/// Presents labels as a checklist and returns the ones the user ticked.
///
/// `checked` holds the initial tick state for each label.
pub trait Selector {
    async fn choose(
        &self,
        message: &str,
        labels: &[String],
        checked: &[bool],
        page_size: usize,
    ) -> Result<Vec<String>>;
}

/// Console checklist using dialoguer, drawn on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSelector;

impl Selector for ConsoleSelector {
    async fn choose(
        &self,
        message: &str,
        labels: &[String],
        checked: &[bool],
        page_size: usize,
    ) -> Result<Vec<String>> {
        let prompt = message.to_string();
        let items = labels.to_vec();
        let defaults = checked.to_vec();
        let picked = task::spawn_blocking(move || {
            MultiSelect::new()
                .with_prompt(prompt)
                .items(&items)
                .defaults(&defaults)
                .max_length(page_size)
                .interact_opt()
                .map(|picked| {
                    picked.map(|indices| {
                        indices
                            .into_iter()
                            .map(|idx| items[idx].clone())
                            .collect::<Vec<_>>()
                    })
                })
        })
        .await
        .map_err(join_error)?;

        picked.context(PromptSnafu)?.context(CancelledSnafu)
    }
}
