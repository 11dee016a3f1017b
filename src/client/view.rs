use crate::client::identity::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// What is currently rendered into the root container. Reconstructed
/// from each state-change notification, never diffed or cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    LoggedOut(AuthMode),
    LoggedIn(Session),
}

/// Declarative element tree produced by `view`. Mounting replaces the
/// root container wholesale, so nodes carry no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            tag,
            attrs,
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape(content)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "img")
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Pure state-to-tree function. The controller mounts the result; the
/// previous view's content and handlers are discarded with it.
pub fn view(state: &ViewState) -> Node {
    match state {
        ViewState::Loading => loading(),
        ViewState::LoggedOut(AuthMode::Login) => login_form(),
        ViewState::LoggedOut(AuthMode::Signup) => signup_form(),
        ViewState::LoggedIn(session) => dashboard(&session.user.email),
    }
}

fn loading() -> Node {
    Node::element(
        "div",
        vec![("id", "app-loading".to_string())],
        vec![Node::element("p", vec![], vec![Node::text("Loading...")])],
    )
}

fn login_form() -> Node {
    Node::element(
        "div",
        vec![],
        vec![
            Node::element("h2", vec![], vec![Node::text("Login to CCS Hyper")]),
            Node::element(
                "form",
                vec![("id", "login-form".to_string())],
                vec![
                    form_field("Email", "email", "email"),
                    form_field("Password", "password", "password"),
                    submit_button("Login"),
                ],
            ),
            Node::element(
                "p",
                vec![],
                vec![
                    Node::text("Or "),
                    link("show-signup", "create an account"),
                    Node::text("."),
                ],
            ),
        ],
    )
}

fn signup_form() -> Node {
    Node::element(
        "div",
        vec![],
        vec![
            Node::element("h2", vec![], vec![Node::text("Create Account")]),
            Node::element(
                "form",
                vec![("id", "signup-form".to_string())],
                vec![
                    form_field("Email", "email", "email"),
                    form_field("Password", "password", "password"),
                    submit_button("Sign Up"),
                ],
            ),
            Node::element(
                "p",
                vec![],
                vec![
                    Node::text("Or "),
                    link("show-login", "login to your account"),
                    Node::text("."),
                ],
            ),
        ],
    )
}

fn dashboard(email: &str) -> Node {
    Node::element(
        "div",
        vec![],
        vec![
            Node::element("h2", vec![], vec![Node::text(format!("Welcome, {}", email))]),
            Node::element(
                "p",
                vec![],
                vec![Node::text("Your CCS Hyper dashboard is ready.")],
            ),
            action_button("sync-schedule", "btn btn-primary", "Sync CCS Schedule"),
            action_button("google-sync", "btn btn-google", "Sync with Google Calendar"),
            action_button("logout", "btn", "Logout"),
        ],
    )
}

fn form_field(label: &'static str, input_type: &'static str, id: &'static str) -> Node {
    Node::element(
        "div",
        vec![("class", "form-group".to_string())],
        vec![
            Node::element(
                "label",
                vec![("for", id.to_string())],
                vec![Node::text(label)],
            ),
            Node::element(
                "input",
                vec![
                    ("type", input_type.to_string()),
                    ("id", id.to_string()),
                    ("class", "form-control".to_string()),
                    ("required", String::new()),
                ],
                vec![],
            ),
        ],
    )
}

fn submit_button(label: &'static str) -> Node {
    Node::element(
        "button",
        vec![
            ("type", "submit".to_string()),
            ("class", "btn btn-primary".to_string()),
        ],
        vec![Node::text(label)],
    )
}

fn action_button(id: &'static str, class: &'static str, label: &'static str) -> Node {
    Node::element(
        "button",
        vec![("id", id.to_string()), ("class", class.to_string())],
        vec![Node::text(label)],
    )
}

fn link(id: &'static str, label: &'static str) -> Node {
    Node::element(
        "a",
        vec![("href", "#".to_string()), ("id", id.to_string())],
        vec![Node::text(label)],
    )
}
