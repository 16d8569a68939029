use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Neomorphic Oasis";

const DESCRIPTION: &str = "Login to the Neomorphic Oasis application, inspired by Islamic architectural artistry and crafted for accessible, modern interactions.";

pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(DESCRIPTION);
                title { (SITE_NAME) " | " (title) }

                link rel="stylesheet" href="/static/css/oasis.css";
            }
            body {
                (content)
            }
        }
    }
}
