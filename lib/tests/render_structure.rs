use bmhtml::{parse, render, Folder, Tree};
use tl::{HTMLTag, Node, Parser};
use proptest::prelude::*;
use serde_json::{json, Value};

fn link(name: &str, url: &str) -> Value {
    json!({"type": "url", "name": name, "url": url, "date_added": "13000000000000000"})
}

fn folder(name: &str, children: Vec<Value>) -> Value {
    json!({"type": "folder", "name": name, "date_added": "13000000000000000", "children": children})
}

fn render_string(tree: &Tree) -> String {
    let mut buf = Vec::new();
    render(tree.folders(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
}

/// Folder layout as it appears in markup: escaped name, escaped
/// (href, text) pairs, subfolders
#[derive(Debug, PartialEq)]
struct Shape {
    name: String,
    links: Vec<(String, String)>,
    folders: Vec<Shape>,
}

impl Shape {
    fn of(folder: &Folder) -> Self {
        Shape {
            name: escape(folder.name()),
            links: folder
                .links
                .iter()
                .map(|l| (escape(&l.url), escape(l.name())))
                .collect(),
            folders: folder.folders.iter().map(Shape::of).collect(),
        }
    }

    fn depth(&self) -> usize {
        1 + self.folders.iter().map(Shape::depth).max().unwrap_or(0)
    }
}

/// Element children of `tag`, skipping text nodes
fn elements<'p, 'buf>(tag: &HTMLTag<'buf>, parser: &'p Parser<'buf>) -> Vec<&'p HTMLTag<'buf>> {
    tag.children()
        .top()
        .iter()
        .filter_map(|h| h.get(parser))
        .filter_map(Node::as_tag)
        .collect()
}

fn name_of(tag: &HTMLTag) -> String {
    tag.name().as_utf8_str().to_string()
}

/// Folders listed by a `<ul>`, one `<li>` each
fn read_list<'buf>(ul: &HTMLTag<'buf>, parser: &Parser<'buf>) -> Vec<Shape> {
    elements(ul, parser)
        .into_iter()
        .map(|li| {
            assert_eq!(name_of(li), "li");
            read_folder(li, parser)
        })
        .collect()
}

/// `<li><h4>name</h4>[<dl>links</dl>][<ul>subfolders</ul>]</li>`
fn read_folder<'buf>(li: &HTMLTag<'buf>, parser: &Parser<'buf>) -> Shape {
    let children = elements(li, parser);
    let (h4, rest) = children.split_first().expect("folder without heading");
    assert_eq!(name_of(h4), "h4");

    let mut shape = Shape {
        name: h4.inner_text(parser).to_string(),
        links: Vec::new(),
        folders: Vec::new(),
    };
    for child in rest {
        match name_of(child).as_str() {
            "dl" => {
                assert!(shape.links.is_empty() && shape.folders.is_empty());
                for dt in elements(child, parser) {
                    assert_eq!(name_of(dt), "dt");
                    let anchors = elements(dt, parser);
                    assert_eq!(anchors.len(), 1);
                    let a = anchors[0];
                    let href = a
                        .attributes()
                        .get("href")
                        .flatten()
                        .map(|b| b.as_utf8_str().to_string())
                        .unwrap_or_default();
                    shape.links.push((href, a.inner_text(parser).to_string()));
                }
                assert!(!shape.links.is_empty(), "empty <dl>");
            }
            "ul" => {
                assert!(shape.folders.is_empty());
                shape.folders = read_list(child, parser);
                assert!(!shape.folders.is_empty(), "empty <ul>");
            }
            other => panic!("unexpected <{}> inside a folder", other),
        }
    }
    shape
}

/// Rebuild the folder layout from rendered markup
fn read_document(html: &str) -> Vec<Shape> {
    let dom = tl::parse(html, tl::ParserOptions::default()).unwrap();
    let parser = dom.parser();
    let body = dom
        .query_selector("body")
        .unwrap()
        .next()
        .and_then(|h| h.get(parser))
        .and_then(Node::as_tag)
        .expect("document has a body");

    let lists = elements(body, parser);
    match lists.as_slice() {
        [] => Vec::new(),
        [ul] => {
            assert_eq!(name_of(ul), "ul");
            read_list(ul, parser)
        }
        _ => panic!("body holds more than one list"),
    }
}

fn check_structure(tree: &Tree) -> Vec<Shape> {
    let html = render_string(tree);
    let actual = read_document(&html);

    let expected: Vec<Shape> = tree.folders().iter().map(Shape::of).collect();
    assert_eq!(actual, expected);

    let depth = tree.folders().iter().map(Folder::depth).max().unwrap_or(0);
    assert_eq!(actual.iter().map(Shape::depth).max().unwrap_or(0), depth);

    // Every link appears exactly once among all anchors
    let dom = tl::parse(&html, tl::ParserOptions::default()).unwrap();
    let links: usize = tree.folders().iter().map(Folder::link_count).sum();
    assert_eq!(dom.query_selector("a").unwrap().count(), links);
    assert_eq!(dom.query_selector("dt").unwrap().count(), links);

    actual
}

#[test]
fn test_structure_is_preserved() {
    let roots = json!({
        "bookmark_bar": folder("Bar", vec![
            link("Rust", "https://www.rust-lang.org/"),
            folder("Dev", vec![
                link("Docs & Books", "https://doc.rust-lang.org/?q=a&b"),
                folder("Deeper", vec![
                    folder("Deepest", vec![link("x", "https://x.example")]),
                ]),
                link("crates", "https://crates.io"),
            ]),
            folder("Empty", vec![]),
        ]),
        "other": folder("Other", vec![link("Other link", "https://other.example")]),
        "synced": folder("Mobile", vec![]),
    });

    let tree = parse(&roots).unwrap();
    let shapes = check_structure(&tree);
    assert_eq!(shapes.iter().map(Shape::depth).max(), Some(4));
    assert_eq!(shapes[0].folders[0].links[0].1, "Docs &amp; Books");
    assert!(shapes[2].links.is_empty() && shapes[2].folders.is_empty());
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>&\"']{0,12}"
}

proptest! {
    #[test]
    fn prop_special_characters_never_leak(
        names in prop::collection::vec((name_strategy(), name_strategy()), 1..8),
        folder_name in name_strategy(),
    ) {
        let children: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, (name, url))| {
                link(&format!("{}{}", i, name), &format!("https://{}.example/{}", i, url))
            })
            .collect();
        let roots = json!({"bookmark_bar": folder(&folder_name, children)});
        let tree = parse(&roots).unwrap();
        check_structure(&tree);

        let html = render_string(&tree);
        // Strip the markup we emit ourselves; what remains must be free of raw specials
        let body_start = html.find("<body>").unwrap() + "<body>".len();
        let body_end = html.find("</body>").unwrap();
        let mut body = html[body_start..body_end].to_string();
        let markup = [
            "<ul>", "</ul>", "<li>", "</li>", "<h4>", "</h4>", "<dl>", "</dl>", "<dt>", "</dt>",
            "</a>", "<a href=\"", "\">",
        ];
        for markup in markup {
            body = body.replace(markup, "");
        }
        prop_assert!(!body.contains('<'));
        prop_assert!(!body.contains('>'));
        prop_assert!(!body.contains('"'));
        prop_assert!(!body.contains('\''));
    }
}
