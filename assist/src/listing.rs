//! Listing projection exposed to the assistant's tool.
//!
//! A read-only view of a stored internship posting, restricted to the fields
//! the tool contract declares. Fields present only in the store (e.g. the
//! posting timestamp) are excluded on purpose: the assistant must never see,
//! and therefore never leak, data outside the declared schema.

use serde::{Deserialize, Serialize};

/// One internship posting as the tool hands it to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Opaque, stable identifier; used verbatim as the `/internships/<id>`
    /// path segment in generated links.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

impl Listing {
    /// Renders the navigable reference the InternLink UI expects, exactly:
    /// `[<title>] at [<company>](/internships/<id>)`.
    ///
    /// Downstream rendering treats assistant output as Markdown, so the shape
    /// is a hard contract, not cosmetics. The prompt instructs the model to
    /// use this pattern; this helper keeps tests and prompt text in agreement.
    pub fn link(&self) -> String {
        format!(
            "[{}] at [{}](/internships/{})",
            self.title, self.company, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            id: "a1".into(),
            title: "Frontend Intern".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            description: "Build UI components.".into(),
        }
    }

    /// **Scenario**: link() matches the contract pattern byte-for-byte.
    #[test]
    fn link_renders_exact_pattern() {
        assert_eq!(
            sample().link(),
            "[Frontend Intern] at [Acme](/internships/a1)"
        );
    }

    /// **Scenario**: the id lands in the link unmodified, even with odd chars.
    #[test]
    fn link_uses_id_verbatim() {
        let mut l = sample();
        l.id = "Xy-9_z".into();
        assert!(l.link().ends_with("(/internships/Xy-9_z)"));
    }
}
