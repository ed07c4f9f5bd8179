extern crate async_trait;

use crate::error::Result;
use async_trait::async_trait;

// Transport seam for the solution-detail page. The plain HTTP client in
// `client` implements this; a challenge-solving client or a driven browser
// can be swapped in without touching the sync loop. `Ok(None)` means the
// page yielded no usable source and the caller should skip, not abort.
#[async_trait]
pub trait SourceFetcher {
    async fn fetch_source(&self, contest_id: u64, submission_id: u64) -> Result<Option<String>>;
}
