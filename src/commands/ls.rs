use crate::core::{
    colors::Style,
    commit::parse_commit,
    config::LsConfig,
    diff_graph::diff_graph,
    diffstat::parse_diff_stat,
    error::{GitLsError, Result},
    git::GitRepo,
    git_status::parse_status,
    hyperlink::github_base_url,
    listing::read_entries,
    table::{render, RenderContext},
    terminal::stdout_columns,
};
use std::io::Write;
use std::path::PathBuf;

/// Options for one `git ls` run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    pub dir: PathBuf,
    /// Overrides the configured diff graph width
    pub diff_width: Option<usize>,
}

pub fn execute_ls(options: LsOptions) -> Result<()> {
    let config = LsConfig::load()?;
    let report = build_report(&options, &config, stdout_columns)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Build the complete report for `options.dir`.
///
/// `columns` reports the terminal width; the report is assembled in memory so
/// nothing is printed when any step fails.
pub fn build_report<F>(options: &LsOptions, config: &LsConfig, columns: F) -> Result<String>
where
    F: FnOnce() -> Option<usize>,
{
    let dir = options
        .dir
        .canonicalize()
        .map_err(|e| GitLsError::directory_read(&options.dir, e))?;
    let mut entries = read_entries(&dir)?;

    let git_repo = GitRepo::open(&dir).map_err(|_| GitLsError::NotInGitRepo)?;
    let relative_dir = git_repo.relative_dir(&dir)?;
    log::debug!(
        "repository {}, listing {:?}",
        git_repo.get_repo_path().display(),
        relative_dir
    );

    parse_status(&git_repo.status_porcelain()?, &mut entries, &relative_dir);

    for entry in entries.iter_mut() {
        let record = git_repo.last_commit(&dir, &entry.name)?;
        parse_commit(&record, entry)?;
    }

    parse_diff_stat(&git_repo.diff_numstat(&dir)?, &mut entries);

    let diff_width = options.diff_width.unwrap_or(config.diff_width);
    for entry in entries.iter_mut() {
        entry.diff_graph = diff_graph(entry.diff_totals, diff_width);
    }

    let base_url = github_base_url(&git_repo.remotes()?);
    log::debug!("github base url: {base_url:?}");

    let branch = git_repo.get_current_branch()?;
    let ctx = RenderContext {
        terminal_width: columns(),
        base_url: base_url.as_deref(),
        dir: &dir,
    };

    let mut report = format!("On branch {}\n\n", Style::Branch.paint(&branch));
    report.push_str(&render(&entries, &ctx));
    Ok(report)
}
