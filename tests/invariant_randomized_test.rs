use xhtml2odt::render::TEXT_NAMESPACE;
use xhtml2odt::xhtml2odt;

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_inclusive_u32(&mut self, low: u32, high: u32) -> u32 {
        let span = (high - low + 1) as u64;
        low + ((self.next_u64() >> 33) % span) as u32
    }
}

struct Generator {
    rng: Lcg,
    tokens: Vec<String>,
}

impl Generator {
    fn token(&mut self) -> String {
        let token = format!("w{}", self.tokens.len());
        self.tokens.push(token.clone());
        token
    }

    fn paragraph(&mut self, depth: u32) -> String {
        let mut out = String::from("<p>");
        let parts = self.rng.next_inclusive_u32(1, 5);
        for _ in 0..parts {
            match self.rng.next_inclusive_u32(0, 6) {
                0 | 1 => {
                    let t = self.token();
                    out.push_str(&t);
                }
                2 => {
                    let t = self.token();
                    out.push_str(&format!("<sup>{t}</sup>"));
                }
                3 => {
                    let t = self.token();
                    out.push_str(&format!("<pre>{t}</pre>"));
                }
                4 => {
                    let a = self.token();
                    let b = self.token();
                    out.push_str(&format!("<ul><li>{a}</li><li>{b}</li></ul>"));
                }
                5 => {
                    let t = self.token();
                    out.push_str(&format!("<blockquote><p>{t}</p></blockquote>"));
                }
                _ if depth < 2 => {
                    let nested = self.paragraph(depth + 1);
                    out.push_str(&nested);
                }
                _ => {
                    let term = self.token();
                    let desc = self.token();
                    out.push_str(&format!("<dl><dt>{term}</dt><dd>{desc}</dd></dl>"));
                }
            }
        }
        out.push_str("</p>");
        out
    }
}

fn is_text_element(node: roxmltree::Node<'_, '_>, name: &str) -> bool {
    node.has_tag_name((TEXT_NAMESPACE, name))
}

fn style_of<'a>(node: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    node.attribute((TEXT_NAMESPACE, "style-name"))
}

#[test]
fn randomized_flattening_invariants() {
    let mut generator = Generator {
        rng: Lcg::new(0x0D7_2026_1019),
        tokens: Vec::new(),
    };
    let iterations = 64;

    for i in 0..iterations {
        generator.tokens.clear();
        let mut body = String::new();
        let paragraphs = generator.rng.next_inclusive_u32(1, 3);
        for _ in 0..paragraphs {
            body.push_str(&generator.paragraph(0));
        }
        let html = format!(r#"<html xmlns="http://www.w3.org/1999/xhtml"><body>{body}</body></html>"#);

        let odt = xhtml2odt(&html).unwrap_or_else(|e| panic!("iteration {i}: {e}\n{html}"));
        let wrapped = format!(r#"<office:text xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="{TEXT_NAMESPACE}">{odt}</office:text>"#);
        let doc = roxmltree::Document::parse(&wrapped)
            .unwrap_or_else(|e| panic!("iteration {i}: output is not well-formed: {e}\n{odt}"));

        // Order preservation: the text found in the output, markup ignored,
        // is the generated token sequence.
        let output_text: String = doc
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .filter(|t| !t.trim().is_empty())
            .collect();
        assert_eq!(
            output_text,
            generator.tokens.concat(),
            "iteration {i}: text order changed\n{html}\n{odt}"
        );

        for node in doc.descendants().filter(|n| is_text_element(*n, "p")) {
            // No block nested inside a paragraph.
            let nested = node
                .descendants()
                .skip(1)
                .any(|d| is_text_element(d, "p") || is_text_element(d, "list"));
            assert!(!nested, "iteration {i}: nested block in paragraph\n{odt}");

            // Every preformatted paragraph is followed by exactly one empty body paragraph.
            if style_of(node) == Some("Preformatted_20_Text") {
                let spacer = node
                    .next_sibling_element()
                    .unwrap_or_else(|| panic!("iteration {i}: pre without spacer\n{odt}"));
                assert!(is_text_element(spacer, "p"));
                assert_eq!(style_of(spacer), Some("Text_20_body"));
                assert!(
                    !spacer.has_children(),
                    "iteration {i}: spacer paragraph must be empty\n{odt}"
                );
            }
        }
    }
}

#[test]
fn style_resolution_is_idempotent_across_documents() {
    let html = r#"<html xmlns="http://www.w3.org/1999/xhtml"><p style="text-align:justify">a<pre>b</pre>c</p></html>"#;
    let first = xhtml2odt(html).expect("conversion failed");
    let second = xhtml2odt(html).expect("conversion failed");
    assert_eq!(first, second);
}
