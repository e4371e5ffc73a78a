use crate::cli::{OutputFormat, SearchArgs};
use crate::constants::EMPTY_RESULT_MESSAGE;
use crate::directory::{DirectoryQuery, SearchResult};
use crate::output;
use crate::render;

/// Run one directory search and print it in the selected format.
///
/// Returns whether the search succeeded.
pub async fn run(query: &DirectoryQuery<'_>, args: SearchArgs) -> bool {
    let outcome = if args.region.is_empty() {
        query.load().await
    } else {
        query.search(&args.region).await
    };

    // The result area now belongs to a newer search; nothing to print.
    if outcome.stale {
        tracing::debug!(region = %args.region, "search superseded before it finished");
        return !outcome.is_failure();
    }

    match output::format() {
        OutputFormat::Html => println!("{}", query.area().html()),
        OutputFormat::Json => match &outcome.result {
            SearchResult::Users { result, .. } | SearchResult::Empty(result) => {
                output::print_item(result, |_| {})
            }
            SearchResult::Failed(err) => eprintln!("Error: {err}"),
        },
        OutputFormat::Table => match &outcome.result {
            SearchResult::Users { label, result } => {
                println!("Search results: {} users ({label})", result.count);
                output::print_table(render::rows(&result.users, query.dates()));
            }
            SearchResult::Empty(_) => output::print_message(EMPTY_RESULT_MESSAGE),
            SearchResult::Failed(err) => eprintln!("Error: {err}"),
        },
    }

    !outcome.is_failure()
}
