use maud::{html, Markup, PreEscaped, DOCTYPE};

/// What the subscription form shows besides the input box.
#[derive(Debug, Default)]
pub struct FormView<'a> {
	pub url: &'a str,
	pub feed_url: Option<&'a str>,
	pub qr: Option<&'a str>,
	pub error: Option<&'a str>,
}

pub fn form(action: &str, view: &FormView) -> Markup {
	html! {
		(DOCTYPE)
		html lang="en" {
			head {
				meta charset="utf-8";
				meta name="viewport" content="width=device-width, initial-scale=1";
				title { "HSE timetable to iCalendar" }
				style { (PreEscaped(STYLE)) }
			}
			body {
				h1 { "HSE timetable to iCalendar" }
				p { "Paste a professor's personal page on hse.ru to get a calendar feed of their lessons." }
				form method="post" action=(action) {
					input type="text" name="url" value=(view.url) size="60"
						placeholder="https://www.hse.ru/staff/...";
					" "
					button type="submit" { "Get calendar" }
				}
				@if let Some(error) = view.error {
					p.error { (error) }
				}
				@if let Some(feed_url) = view.feed_url {
					p {
						"Subscribe your calendar app to "
						a href=(feed_url) { (feed_url) }
					}
					@if let Some(qr) = view.qr {
						div.qr { (PreEscaped(qr)) }
					}
				}
			}
		}
	}
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48em;margin:2em auto}\
	.error{color:#b00}.qr svg{width:200px;height:200px}";
