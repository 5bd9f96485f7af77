use std::str::FromStr;

use anyhow::Result;
use portfolio::Config;
use portfolio_contact::{ContactApi, ContactController, FieldName, HttpContactApi, Submission};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    task::JoinSet,
};

const HELP: &str = "\
Commands:
  name <text>      set your name
  email <text>     set your email
  message <text>   set the message (\\n starts a new line)
  send             submit the form
  reset            clear the form
  show             print the form
  quit             leave";

fn controller(config: &Config) -> Result<ContactController<HttpContactApi>> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let api = HttpContactApi::new(&config.api.base_url, config.api.timeout())?;
    tracing::debug!(endpoint = api.endpoint(), "contact API configured");

    Ok(ContactController::new(api).with_status_clear_delay(config.contact.status_clear_delay()))
}

fn show<A: ContactApi + 'static>(controller: &ContactController<A>) -> Result<()> {
    print!("{}", controller.snapshot().render()?);

    Ok(())
}

#[tracing::instrument(skip_all)]
pub async fn send(config: Config, name: String, email: String, message: String) -> Result<()> {
    let controller = controller(&config)?;
    controller.update_field(FieldName::Name, name);
    controller.update_field(FieldName::Email, email);
    controller.update_field(FieldName::Message, message);

    let outcome = controller.submit().await;
    show(&controller)?;

    match outcome {
        Submission::Sent => Ok(()),
        Submission::Invalid => anyhow::bail!("contact message rejected"),
        _ => anyhow::bail!("contact message not sent"),
    }
}

#[tracing::instrument(skip_all)]
pub async fn session(config: Config) -> Result<()> {
    let controller = controller(&config)?;

    run_session(&controller, BufReader::new(tokio::io::stdin())).await
}

fn report<A: ContactApi + 'static>(
    controller: &ContactController<A>,
    outcome: Submission,
) -> Result<()> {
    match outcome {
        Submission::Busy => println!("A message is already being sent."),
        Submission::Stale => tracing::debug!("ignored reply for a reset form"),
        _ => show(controller)?,
    }

    Ok(())
}

/// Reads commands until `quit` or end of input. Submissions still in
/// flight at that point are awaited, never dropped.
async fn run_session<A, R>(controller: &ContactController<A>, input: R) -> Result<()>
where
    A: ContactApi + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut pending = JoinSet::new();

    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match line.parse::<Input>() {
                    Ok(Input::Set(field, value)) => controller.update_field(field, value),
                    Ok(Input::Send) => {
                        let controller = controller.clone();
                        pending.spawn(async move { controller.submit().await });
                    }
                    Ok(Input::Reset) => {
                        controller.reset();
                        show(controller)?;
                    }
                    Ok(Input::Show) => show(controller)?,
                    Ok(Input::Help) => println!("{HELP}"),
                    Ok(Input::Quit) => break,
                    Err(err) => eprintln!("{err}"),
                }
            }
            Some(done) = pending.join_next() => report(controller, done?)?,
        }
    }

    while let Some(done) = pending.join_next().await {
        report(controller, done?)?;
    }

    Ok(())
}

/// One line typed during an interactive session.
#[derive(Debug, PartialEq)]
enum Input {
    Set(FieldName, String),
    Send,
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        if let Ok(field) = FieldName::from_str(command) {
            return Ok(Input::Set(field, rest.trim_start().replace("\\n", "\n")));
        }

        match command.to_ascii_lowercase().as_str() {
            "send" => Ok(Input::Send),
            "reset" => Ok(Input::Reset),
            "show" | "" => Ok(Input::Show),
            "help" => Ok(Input::Help),
            "quit" | "exit" => Ok(Input::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}
