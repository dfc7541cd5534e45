use bookrack_domain::{BookEntry, Route};

pub fn present_book_row(entry: &BookEntry) -> String {
    format!(
        "{}\t{}\t{}\t{:.1}",
        entry.id.get(),
        entry.title,
        entry.author,
        entry.rating
    )
}

pub fn present_book_detail(entry: &BookEntry) -> String {
    let mut lines = vec![format!("{} (#{})", entry.title, entry.id.get())];
    if !entry.author.is_empty() {
        lines.push(format!("author: {}", entry.author));
    }
    if entry.rating > 0.0 {
        lines.push(format!("rating: {:.1}", entry.rating));
    }
    if !entry.press.is_empty() {
        lines.push(format!("press: {}", entry.press));
    }
    if !entry.price.is_empty() {
        lines.push(format!("price: {}", entry.price));
    }
    if !entry.tag.is_empty() {
        lines.push(format!("tag: {}", entry.tag));
    }
    if !entry.intro.is_empty() {
        lines.push(format!("intro: {}", entry.intro));
    }
    lines.join("\n")
}

pub fn present_route(route: &Route) -> String {
    format!("navigating to {}", route.render())
}
