use std::sync::Arc;

use mandate_core::{Capability, DatasetId, Frame, MandateError};

use crate::Mandate;

impl Mandate {
    /// Fetch a whole published dataset.
    ///
    /// Only connectors listing `id` among their supported datasets are tried.
    ///
    /// # Errors
    /// `Unsupported` when no registered connector publishes the dataset,
    /// `NotFound` when every publisher reports it missing, otherwise the
    /// collapsed provider failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "mandate::router", skip(self), fields(dataset = %id))
    )]
    pub async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        self.fetch_single(
            None,
            Capability::Dataset,
            format!("dataset {id}"),
            move |c| {
                if !c
                    .as_dataset_provider()?
                    .supported_datasets()
                    .contains(&id)
                {
                    return None;
                }
                let c2 = Arc::clone(&c);
                Some(async move {
                    match c2.as_dataset_provider() {
                        Some(p) => p.dataset(id).await,
                        None => Err(MandateError::connector(
                            c2.name(),
                            "missing dataset capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }
}
