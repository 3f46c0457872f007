use super::action::Action;
use super::attachment::Attachment;
use super::priority::Priority;

/// A notification to be published to a topic
///
/// Messages are immutable once built. Use [`Message::builder`] to create one
/// and [`Message::to_builder`] to derive a modified copy.
///
/// # Example
///
/// ```rust
/// use ntfy_publish::{Action, Message, Priority};
///
/// let message = Message::builder()
///     .title("Backup finished")
///     .body("All 3 volumes were backed up")
///     .priority(Priority::High)
///     .tags(["floppy_disk", "white_check_mark"])
///     .add_action(Action::view("Open logs", "https://backup.example.com/logs"))
///     .build();
///
/// assert_eq!(message.tags().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    body: Option<String>,
    title: Option<String>,
    priority: Priority,
    tags: Vec<String>,
    markdown: bool,
    actions: Vec<Action>,
    click_action: Option<String>,
    attachment: Option<Attachment>,
    icon: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    cache: bool,
    firebase: bool,
}

impl Message {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// A message with only a body
    pub fn new(body: impl Into<String>) -> Self {
        Self::builder().body(body).build()
    }

    /// A message with a body and a title
    pub fn with_title(body: impl Into<String>, title: impl Into<String>) -> Self {
        Self::builder().body(body).title(title).build()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Tags in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the body should be rendered as Markdown
    pub fn markdown(&self) -> bool {
        self.markdown
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// URL opened when the notification is tapped
    pub fn click_action(&self) -> Option<&str> {
        self.click_action.as_deref()
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Address the notification is forwarded to by email
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone number called to read the notification out
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Whether the server caches the message for later subscribers
    pub fn cache(&self) -> bool {
        self.cache
    }

    /// Whether the server forwards the message to Firebase
    pub fn firebase(&self) -> bool {
        self.firebase
    }

    pub fn to_builder(&self) -> MessageBuilder {
        MessageBuilder {
            body: self.body.clone(),
            title: self.title.clone(),
            priority: self.priority,
            tags: self.tags.clone(),
            markdown: self.markdown,
            actions: self.actions.clone(),
            click_action: self.click_action.clone(),
            attachment: self.attachment.clone(),
            icon: self.icon.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            cache: self.cache,
            firebase: self.firebase,
        }
    }
}

/// Builder for [`Message`]
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    body: Option<String>,
    title: Option<String>,
    priority: Priority,
    tags: Vec<String>,
    markdown: bool,
    actions: Vec<Action>,
    click_action: Option<String>,
    attachment: Option<Attachment>,
    icon: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    cache: bool,
    firebase: bool,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self {
            body: None,
            title: None,
            priority: Priority::Default,
            tags: Vec::new(),
            markdown: false,
            actions: Vec::new(),
            click_action: None,
            attachment: None,
            icon: None,
            email: None,
            phone: None,
            cache: true,
            firebase: true,
        }
    }
}

impl MessageBuilder {
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replace all tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    /// Replace all actions
    pub fn actions<I, A>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Action>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn click_action(mut self, url: impl Into<String>) -> Self {
        self.click_action = Some(url.into());
        self
    }

    pub fn attachment(mut self, attachment: impl Into<Attachment>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    pub fn icon(mut self, url: impl Into<String>) -> Self {
        self.icon = Some(url.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn firebase(mut self, firebase: bool) -> Self {
        self.firebase = firebase;
        self
    }

    pub fn build(self) -> Message {
        Message {
            body: self.body,
            title: self.title,
            priority: self.priority,
            tags: self.tags,
            markdown: self.markdown,
            actions: self.actions,
            click_action: self.click_action,
            attachment: self.attachment,
            icon: self.icon,
            email: self.email,
            phone: self.phone,
            cache: self.cache,
            firebase: self.firebase,
        }
    }
}
