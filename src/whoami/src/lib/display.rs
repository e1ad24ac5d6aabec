use whoami_core::location::PageLocation;
use whoami_core::session::Session;
use whoami_core::view::{render, Action, View};

/// Prints the page for `session`. Errors are left to `main`, which prints them along with
/// their diagnosis.
pub fn print_view(session: &Session, location: &PageLocation) {
    println!("Who Am I?");
    println!();

    let page = match render(session) {
        View::Placeholder => {
            println!("Loading...");
            return;
        }
        View::Page(page) => page,
    };

    println!("A principal is a unique identifier in the Internet Computer ecosystem that represents your identity.");
    println!("{}", page.about.text());
    println!();

    if let Some(principal) = &page.principal {
        println!("Your principal ID is:");
        println!("  {}", principal.full);
        println!("  (shortened: {})", principal.shortened);
        println!("Authenticated with Internet Identity");
        println!();
    }

    match page.action {
        Action::Processing => println!("{}", page.action.label()),
        Action::Login => println!("[{}]  whoami login", page.action.label()),
        Action::Logout => println!("[{}]  whoami logout", page.action.label()),
    }
    if page.complete_authentication && !session.window_closed() {
        println!("[Complete Authentication]  whoami complete");
    }
    println!();
    println!("Page: {}", location.url());
}
