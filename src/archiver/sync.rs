extern crate log;

use crate::{
    client::{
        submission::{ProblemId, Submission},
        Session,
    },
    error::{Error, Result},
    fetch::SourceFetcher,
    history::History,
    writer,
};
use log::{info, warn};
use std::{collections::HashSet, fs, path::PathBuf};

pub struct SyncConfig {
    pub handle: String,
    pub count: u64,
    pub out_dir: PathBuf,
    pub history_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub archived: Vec<ProblemId>,
    pub skipped: Vec<ProblemId>,
}

// Oldest accepted submission wins when a problem was solved more than once
// inside the fetch window, so the archive keeps first-solve provenance.
pub fn select_new<'a>(submissions: &'a [Submission], history: &History) -> Vec<&'a Submission> {
    let mut picked: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.is_accepted() && !history.contains(s.problem_id().as_str()))
        .collect();
    picked.sort_by_key(|s| s.creation_time_seconds);
    let mut seen = HashSet::new();
    picked.retain(|s| seen.insert(s.problem_id()));
    picked
}

pub async fn run(session: &Session, config: &SyncConfig) -> Result<Report> {
    let mut history = History::load(&config.history_path)?;
    let submissions = session.user_status(&config.handle, config.count).await?;
    let result = archive_batch(session, &submissions, &mut history, config).await;
    // Persist whatever succeeded even when the batch failed mid-loop.
    let saved = history.save(&config.history_path);
    let report = result?;
    saved?;
    Ok(report)
}

pub async fn archive_batch<F>(
    fetcher: &F,
    submissions: &[Submission],
    history: &mut History,
    config: &SyncConfig,
) -> Result<Report>
where
    F: SourceFetcher + ?Sized,
{
    fs::create_dir_all(&config.out_dir).map_err(Error::Io)?;
    let mut report = Report::default();
    for submission in select_new(submissions, history) {
        let id = submission.problem_id();
        info!("fetching source for {} (submission {})", id, submission.id);
        let source = match fetcher
            .fetch_source(submission.contest_id, submission.id)
            .await?
        {
            Some(source) => source,
            None => {
                warn!("no source available for {}, skipping", id);
                report.skipped.push(id);
                continue;
            }
        };
        match writer::write_solution(
            &config.out_dir,
            &id,
            &submission.programming_language,
            &source,
        ) {
            Ok(path) => info!("archived {} to {}", id, path.display()),
            Err(e) => {
                warn!("failed to write solution for {}: {}", id, e);
                report.skipped.push(id);
                continue;
            }
        }
        // The log is best-effort: the solution file is already on disk, so
        // a failed append must not keep the problem out of history.
        if let Some(log_path) = &config.log_path {
            if let Err(e) =
                writer::append_log(log_path, &id, submission.problem.name.as_deref())
            {
                warn!("failed to append archive log for {}: {}", id, e);
            }
        }
        history.add(id.as_str());
        report.archived.push(id);
    }
    Ok(report)
}
