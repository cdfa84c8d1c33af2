use ariadom::{Element, Role, to_markup};

#[test]
fn test_markup_void_and_nested() {
    let root = Element::div()
        .id("wrapper")
        .child(
            Element::input()
                .id("combo")
                .role(Role::Combobox)
                .aria_bool("expanded", false)
                .attr("value", "---"),
        )
        .child(
            Element::ul()
                .id("popup")
                .role(Role::Listbox)
                .hidden(true)
                .child(Element::li().id("opt").role(Role::Option).tabindex(-1).text("a")),
        );

    let expected = "\
<div id=\"wrapper\">
  <input id=\"combo\" role=\"combobox\" aria-expanded=\"false\" value=\"---\" />
  <ul id=\"popup\" role=\"listbox\" hidden>
    <li id=\"opt\" role=\"option\" tabindex=\"-1\">a</li>
  </ul>
</div>
";
    assert_eq!(to_markup(&root), expected);
}

#[test]
fn test_markup_escapes_text_and_attributes() {
    let el = Element::span().id("s").attr("title", "a \"b\"").text("x < y & z");
    assert_eq!(
        to_markup(&el),
        "<span id=\"s\" title=\"a &quot;b&quot;\">x &lt; y &amp; z</span>\n"
    );
}

#[test]
fn test_attr_replaces_existing_value() {
    let el = Element::div().id("d").aria("label", "one").aria("label", "two");
    assert_eq!(el.get_attr("aria-label"), Some("two"));
    assert_eq!(el.attrs.len(), 1);
}

#[test]
fn test_attr_opt_skips_none() {
    let el = Element::div()
        .id("d")
        .attr_opt("aria-activedescendant", None::<String>)
        .attr_opt("aria-controls", Some("popup"));
    assert_eq!(el.get_attr("aria-activedescendant"), None);
    assert_eq!(el.get_attr("aria-controls"), Some("popup"));
}
