//! Publish command handler
//!
//! Builds a message and a topic from the command line and the configuration
//! file, then publishes it or prints the request on `--dry-run`.

use anyhow::{bail, Context, Result};
use ntfy_publish::client::topic::delivery_time;
use ntfy_publish::{Action, Attachment, Message, Outcome, Topic};
use std::time::Duration;
use tracing::{debug, info};

use super::super::commands::PublishArgs;
use super::super::CliContext;

/// Handler for the publish command
pub struct PublishHandler<'a> {
    context: &'a CliContext,
}

impl<'a> PublishHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, args: PublishArgs) -> Result<()> {
        let topic = self.topic(&args)?;
        let message = self.message(&args);

        if args.dry_run {
            let delay = args
                .delay
                .map(|secs| delivery_time(Duration::from_secs(secs)))
                .transpose()?;
            print!("{}", topic.prepare(&message, delay));
            return Ok(());
        }

        debug!(topic = %topic.url(), "Sending message");
        let outcome = match args.delay {
            Some(secs) => topic.schedule_in(&message, Duration::from_secs(secs)).await?,
            None => topic.publish(&message).await?,
        };

        match outcome {
            Outcome::Success(response) => {
                info!(id = %response.id, "Message published");
                println!("{}", response.id);
                Ok(())
            }
            Outcome::Error(error) => {
                let mut detail = format!("HTTP {} (code {}): {}", error.http, error.code, error.error);
                if let Some(link) = &error.link {
                    detail.push_str(&format!(", see {link}"));
                }
                bail!("Server rejected message: {detail}")
            }
        }
    }

    fn topic(&self, args: &PublishArgs) -> Result<Topic> {
        let config = self.context.config_manager.config();
        let name = match args.topic.as_ref().or(config.defaults.topic.as_ref()) {
            Some(name) => name.clone(),
            None => bail!("No topic given and no defaults.topic configured"),
        };

        let mut server = config.server.clone();
        if let Some(host) = &args.host {
            server.host = host.clone();
        }
        if let Some(token) = &args.token {
            server.token = Some(token.clone());
            server.username = None;
            server.password = None;
        }

        server
            .topic(name.as_str())
            .with_context(|| format!("Invalid topic configuration for '{name}'"))
    }

    fn message(&self, args: &PublishArgs) -> Message {
        let defaults = &self.context.config_manager.config().defaults;
        let mut builder = Message::builder();

        if let Some(body) = &args.message {
            builder = builder.body(body.clone());
        }
        if let Some(title) = &args.title {
            builder = builder.title(title.clone());
        }
        if let Some(priority) = args.priority.or(defaults.priority) {
            builder = builder.priority(priority);
        }

        let tags = if args.tags.is_empty() {
            &defaults.tags
        } else {
            &args.tags
        };
        builder = builder
            .tags(tags.iter().cloned())
            .markdown(args.markdown || defaults.markdown)
            .actions(
                args.views
                    .iter()
                    .map(|(label, url)| Action::view(label.clone(), url.clone())),
            )
            .cache(!args.no_cache)
            .firebase(!args.no_firebase);

        if let Some(click) = &args.click {
            builder = builder.click_action(click.clone());
        }
        if let Some(attachment) = self.attachment(args) {
            builder = builder.attachment(attachment);
        }
        if let Some(icon) = &args.icon {
            builder = builder.icon(icon.clone());
        }
        if let Some(email) = &args.email {
            builder = builder.email(email.clone());
        }
        if let Some(call) = &args.call {
            builder = builder.phone(call.clone());
        }

        builder.build()
    }

    fn attachment(&self, args: &PublishArgs) -> Option<Attachment> {
        match (&args.file, &args.attach, &args.filename) {
            (Some(path), _, Some(name)) => Some(Attachment::file_named(path.clone(), name.clone())),
            (Some(path), _, None) => Some(Attachment::file(path.clone())),
            (None, Some(url), Some(name)) => Some(Attachment::url_named(url.clone(), name.clone())),
            (None, Some(url), None) => Some(Attachment::url(url.clone())),
            (None, None, _) => None,
        }
    }
}
