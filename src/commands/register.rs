use colored::Colorize;
use serde_json::json;

use crate::cli::RegisterArgs;
use crate::client::DirectoryClient;
use crate::form::RegistrationForm;
use crate::notify::TerminalNotifier;
use crate::output;
use crate::registration::{RegistrationFlow, SubmitOutcome};

/// Submit the registration form built from the command-line flags.
///
/// Returns whether the user was registered; failures have already been
/// reported to the user.
pub async fn run(client: &DirectoryClient, args: RegisterArgs) -> bool {
    let mut form = RegistrationForm::new(args.name, args.region, args.email);
    let flow = RegistrationFlow::new(client, TerminalNotifier);

    let outcome = flow.submit(&mut form).await;

    match &outcome {
        SubmitOutcome::Registered(response) => {
            output::print_item(response, |response| {
                let Some(user) = response.user().filter(|_| !output::is_quiet()) else {
                    return;
                };
                println!(
                    "{} {} <{}> in {} (ID {})",
                    "Registered".bold(),
                    user.name,
                    user.email,
                    user.region,
                    user.id
                );
            });
        }
        // Scripts reading JSON get the failure on stdout as well.
        SubmitOutcome::Invalid(err) if output::is_json_output() => {
            println!("{}", json!({ "error": err.to_string(), "kind": "validation" }));
        }
        SubmitOutcome::Failed(err) if output::is_json_output() => {
            println!("{}", json!({ "error": err.user_message(), "kind": "request" }));
        }
        SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {}
    }

    outcome.is_success()
}
