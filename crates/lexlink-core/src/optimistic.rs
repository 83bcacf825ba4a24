// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optimistic mutation with rollback.
//!
//! List views apply a local mutation immediately (delete a row, flip a
//! status) and then run the backend call. If the call fails, the
//! pre-mutation snapshot is restored and the error is returned for the
//! caller to surface. The same helper serves every list view instead of
//! each repeating the snapshot/restore dance.

use std::future::Future;

use crate::error::LexlinkError;

/// Applies `mutate` to `items`, then awaits `remote`.
///
/// On `Err`, `items` is restored to its pre-mutation contents and the
/// error is returned. On `Ok`, the mutation stands and the remote
/// call's value is passed through.
pub async fn apply<T, R, F>(
    items: &mut Vec<T>,
    mutate: impl FnOnce(&mut Vec<T>),
    remote: F,
) -> Result<R, LexlinkError>
where
    T: Clone,
    F: Future<Output = Result<R, LexlinkError>>,
{
    let snapshot = items.clone();
    mutate(items);

    match remote.await {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::debug!(error = %err, "remote call failed, rolling back local mutation");
            *items = snapshot;
            Err(err)
        }
    }
}
