use dioxus::prelude::*;

/// Server hosting the tip generation functions; override at build time.
const SERVER_URL: &str = match option_env!("WELLNESS_SERVER_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8080",
};

fn main() {
    dioxus::fullstack::set_server_url(SERVER_URL);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        ui::WellnessProvider {
            ui::WellnessApp {}
        }
    }
}
