use crate::backend::Product;
use crate::core::error::SearchError;
use crate::session::search::SearchPhase;
use crate::session::{Catalog, ChatOutcome, Message, Mode, Role, Session};
use crate::utils::text::{display_width, wrap_text};
use console::style;
use termimad::MadSkin;

const RECOMMENDED_BANNER: &str = "AI RECOMMENDS THIS PRODUCT";

fn content_width() -> usize {
    let term = console::Term::stdout();
    let terminal_width = term.size().1 as usize;
    std::cmp::min(terminal_width.saturating_sub(4), 100).max(50)
}

/// Tab bar; the store tab carries a dot once the advisor picked something.
pub fn render_tabs(session: &Session) -> String {
    let dot = if session.has_recommendation() {
        format!(" {}", style("●").green())
    } else {
        String::new()
    };
    let store = format!("[{}{}]", Mode::Store.label(), dot);
    let advisor = format!("[{}]", Mode::Advisor.label());

    let (store, advisor) = match session.mode() {
        Mode::Store => (
            style(store).bold().white().to_string(),
            style(advisor).dim().to_string(),
        ),
        Mode::Advisor => (
            style(store).dim().to_string(),
            style(advisor).bold().white().to_string(),
        ),
    };
    format!("{} {}", store, advisor)
}

/// Tabs plus whichever view is active. Empty when there is nothing to show.
pub fn render_view(session: &Session) -> String {
    if session.catalog().is_empty() {
        return String::new();
    }
    let body = match session.mode() {
        Mode::Store => render_store(session.catalog()),
        Mode::Advisor => render_advisor(session),
    };
    format!("{}\n{}", render_tabs(session), body)
}

pub fn render_store(catalog: &Catalog) -> String {
    let width = content_width();
    let mut lines = Vec::new();

    for (index, product, recommended) in catalog.entries() {
        lines.push(String::new());
        if recommended {
            lines.push(style(format!("★ {}", RECOMMENDED_BANNER)).bold().green().to_string());
        }

        let number = format!("{:>2}.", index + 1);
        let badge = format!(" {} ", product.source);
        lines.push(format!(
            "{} {}",
            style(number).bold().cyan(),
            style(badge).reverse()
        ));

        for line in wrap_text(&product.title, width.saturating_sub(4)) {
            lines.push(format!("    {}", line));
        }

        let price = if recommended {
            style(&product.price).bold().green()
        } else {
            style(&product.price).bold().white()
        };
        lines.push(format!("    {}  {}", price, render_rating(product.rating)));
    }

    lines.join("\n")
}

fn render_rating(rating: f64) -> String {
    if rating <= 0.0 {
        return style("no rating").dim().to_string();
    }
    style(format!("★ {:.1}", rating)).yellow().to_string()
}

pub fn render_advisor(session: &Session) -> String {
    let catalog = session.catalog();
    let mut lines = vec![format!(
        "{} {}",
        style("Shopping advisor").bold().magenta(),
        style(format!("- analyzing {} products", catalog.len())).dim()
    )];

    if session.has_recommendation() {
        lines.push(
            style("See the recommended product: /best")
                .green()
                .to_string(),
        );
    }

    for message in session.transcript() {
        lines.push(render_message(message));
    }

    lines.join("\n")
}

/// Status line for a request that is still out.
pub fn render_pending(session: &Session) -> Option<String> {
    let label = match session.search_phase() {
        SearchPhase::Pending => "Searching…",
        _ if session.is_chat_busy() => "Thinking…",
        _ => return None,
    };
    Some(style(label).dim().italic().to_string())
}

pub fn render_message(message: &Message) -> String {
    match message.role {
        Role::User => format!(
            "\n{} {}",
            style("you ›").bold().blue(),
            message.content
        ),
        Role::Assistant => {
            let skin = MadSkin::default();
            let text = skin.text(&message.content, Some(content_width()));
            format!("\n{}\n{}", style("advisor ›").bold().green(), text)
        }
    }
}

/// What to print after a chat message went through [`Session::send`].
pub fn render_chat_outcome(session: &Session, outcome: ChatOutcome) -> Option<String> {
    match outcome {
        ChatOutcome::Rejected => None,
        ChatOutcome::Failed => Some(
            style("The advisor could not be reached. Try again.")
                .red()
                .to_string(),
        ),
        ChatOutcome::Stale => None,
        ChatOutcome::Replied { recommended } => {
            let mut out = session
                .transcript()
                .last()
                .map(render_message)
                .unwrap_or_default();
            let pick = recommended.zip(session.catalog().recommended());
            if let Some((index, product)) = pick {
                out.push_str(&format!(
                    "\n\n{} #{} {} - see it with /best",
                    style("Recommended:").bold().green(),
                    index + 1,
                    product.title
                ));
            }
            Some(out)
        }
    }
}

pub fn render_search_error(err: &SearchError) -> Option<String> {
    if !err.is_user_visible() {
        return None;
    }
    Some(format!("{} {}", style("!").bold().red(), style(err).red()))
}

/// Full details of one product, including its link.
pub fn render_product(catalog: &Catalog, index: usize) -> Option<String> {
    let product: &Product = catalog.get(index)?;
    let label_width = ["Title", "Price", "Store", "Rating", "Link", "Image"]
        .iter()
        .map(|l| display_width(l))
        .max()
        .unwrap_or(0);
    let row = |label: &str, value: String| {
        format!(
            "{}{}  {}",
            style(label).bold(),
            " ".repeat(label_width - display_width(label)),
            value
        )
    };

    let mut lines = Vec::new();
    if catalog.is_recommended(index) {
        lines.push(style(RECOMMENDED_BANNER).bold().green().to_string());
    }
    lines.push(row("Title", product.title.clone()));
    lines.push(row("Price", product.price.clone()));
    lines.push(row("Store", product.source.clone()));
    lines.push(row("Rating", render_rating(product.rating)));
    lines.push(row("Link", style(&product.link).underlined().to_string()));
    lines.push(row("Image", product.thumbnail.clone()));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SearchResponse;
    use crate::core::error::ScoutError;
    use crate::session::testing::{FakeBackend, products};

    async fn searched(titles: &[&str], chat: Option<(&str, Option<i64>)>) -> Session {
        let mut backend = FakeBackend::new().with_search(Ok(products(titles)));
        if let Some(reply) = chat {
            backend = backend.with_chat(Ok(reply));
        }
        let mut session = Session::new();
        session.submit(&backend, "q").await.unwrap();
        if chat.is_some() {
            session.send(&backend, "which?").await;
        }
        session
    }

    #[tokio::test]
    async fn store_marks_only_the_recommended_product() {
        let session = searched(&["alpha", "beta", "gamma"], Some(("beta", Some(1)))).await;
        let out = render_store(session.catalog());

        assert_eq!(out.matches(RECOMMENDED_BANNER).count(), 1);
        let banner = out.find(RECOMMENDED_BANNER).unwrap();
        assert!(out.find("alpha").unwrap() < banner);
        assert!(banner < out.find("beta").unwrap());
    }

    #[tokio::test]
    async fn store_dot_appears_with_recommendation() {
        let plain = searched(&["a", "b"], None).await;
        let picked = searched(&["a", "b"], Some(("b", Some(1)))).await;

        assert!(!render_tabs(&plain).contains('●'));
        assert!(render_tabs(&picked).contains('●'));
    }

    #[tokio::test]
    async fn advisor_view_shows_count_and_transcript() {
        let mut session = searched(&["a", "b", "c"], None).await;
        session.set_mode(Mode::Advisor);

        let out = render_view(&session);
        assert!(out.contains("analyzing 3 products"));
        assert!(out.contains("Found 3 offers"));
        assert!(!out.contains("/best"));
    }

    #[test]
    fn nothing_to_show_without_catalog() {
        assert_eq!(render_view(&Session::new()), "");
    }

    #[test]
    fn local_search_errors_are_silent() {
        assert_eq!(render_search_error(&SearchError::EmptyQuery), None);
        assert_eq!(render_search_error(&SearchError::InFlight), None);
        assert!(
            render_search_error(&SearchError::NoResults)
                .unwrap()
                .contains("No products found")
        );
    }

    #[tokio::test]
    async fn product_details_include_link() {
        let session = searched(&["alpha"], None).await;
        let out = render_product(session.catalog(), 0).unwrap();
        assert!(out.contains("https://shop.example/alpha"));
        assert!(render_product(session.catalog(), 1).is_none());
    }

    #[tokio::test]
    async fn pending_line_follows_the_request_in_flight() {
        let mut session = Session::new();
        assert_eq!(render_pending(&session), None);

        let ticket = session.begin_search("mouse").unwrap();
        assert!(render_pending(&session).unwrap().contains("Searching"));
        let response = SearchResponse {
            products: Some(products(&["a", "b"])),
        };
        session.finish_search(ticket, Ok(response)).unwrap();
        assert_eq!(render_pending(&session), None);

        let ticket = session.begin_send("which?").unwrap();
        assert!(render_pending(&session).unwrap().contains("Thinking"));
        session.finish_send(ticket, Err(ScoutError::Network("down".into())));
        assert_eq!(render_pending(&session), None);
    }

    #[tokio::test]
    async fn reply_names_the_recommended_product() {
        let session = searched(&["alpha", "beta"], Some(("go with beta", Some(1)))).await;
        let out = render_chat_outcome(&session, ChatOutcome::Replied { recommended: Some(1) })
            .unwrap();
        assert!(out.contains("#2 beta"));

        let out = render_chat_outcome(&session, ChatOutcome::Replied { recommended: None })
            .unwrap();
        assert!(!out.contains("Recommended:"));
    }

    #[tokio::test]
    async fn failed_chat_has_a_notice() {
        let session = searched(&["a"], None).await;
        assert!(render_chat_outcome(&session, ChatOutcome::Failed).is_some());
        assert!(render_chat_outcome(&session, ChatOutcome::Rejected).is_none());
    }
}
