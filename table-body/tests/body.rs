use table_body::{
    is_attribute_name, render_body, BodyOptions, CellNode, Collection, Markup, RowNode,
};

fn people() -> Collection {
    Collection::new(2)
        .row(
            RowNode::new("1")
                .cell(CellNode::new("1-name", "Ada"))
                .cell(CellNode::new("1-role", "Engineer")),
        )
        .row(
            RowNode::new("2")
                .cell(CellNode::new("2-name", "Grace"))
                .cell(CellNode::new("2-role", "Admiral")),
        )
}

fn rows(body: &Markup) -> Vec<&Markup> {
    body.child_nodes().iter().collect()
}

// ============================================================================
// Rows and cells
// ============================================================================

#[test]
fn test_body_has_rowgroup_role() {
    let body = render_body(&people(), &BodyOptions::default());

    assert_eq!(body.tag(), Some("tbody"));
    assert_eq!(body.get_attr("role"), Some("rowgroup"));
    assert_eq!(body.get_attr("data-empty"), None);
}

#[test]
fn test_rows_and_cells_follow_collection_order() {
    let body = render_body(&people(), &BodyOptions::default());
    let rows = rows(&body);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get_attr("role"), Some("row"));
    assert_eq!(rows[0].get_attr("data-key"), Some("1"));
    assert_eq!(rows[1].get_attr("data-key"), Some("2"));

    let cells = rows[1].child_nodes();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].get_attr("role"), Some("gridcell"));
    assert_eq!(cells[0].text_content(), "Grace");
    assert_eq!(cells[1].text_content(), "Admiral");
}

#[test]
fn test_selection_cell_renders_checkbox() {
    let collection = Collection::new(2).row(
        RowNode::new("1")
            .selected(true)
            .cell(CellNode::selection("1-select"))
            .cell(CellNode::new("1-name", "Ada")),
    );
    let body = render_body(&collection, &BodyOptions::default());
    let row = &body.child_nodes()[0];

    assert_eq!(row.get_attr("aria-selected"), Some("true"));
    let cell = &row.child_nodes()[0];
    assert_eq!(cell.get_attr("data-selection-cell"), Some("true"));
    let checkbox = &cell.child_nodes()[0];
    assert_eq!(checkbox.tag(), Some("input"));
    assert_eq!(checkbox.get_attr("type"), Some("checkbox"));
    assert_eq!(checkbox.get_attr("aria-label"), Some("Select"));
    assert_eq!(checkbox.get_attr("checked"), Some(""));
}

// ============================================================================
// Empty state
// ============================================================================

#[test]
fn test_empty_collection_with_renderer() {
    let collection = Collection::new(3).empty_state(|| "No rows to display.".to_string());
    let body = render_body(&collection, &BodyOptions::default());

    assert_eq!(body.get_attr("data-empty"), Some("true"));
    let rows = rows(&body);
    assert_eq!(rows.len(), 1);
    let cell = &rows[0].child_nodes()[0];
    assert_eq!(cell.get_attr("colspan"), Some("3"));
    assert_eq!(cell.get_attr("role"), Some("gridcell"));
    assert_eq!(cell.get_attr("class"), Some("empty-wrapper"));
    assert_eq!(cell.text_content(), "No rows to display.");
}

#[test]
fn test_empty_collection_without_renderer() {
    let body = render_body(&Collection::new(3), &BodyOptions::default());

    assert_eq!(body.get_attr("data-empty"), Some("true"));
    assert!(body.child_nodes().is_empty());
}

#[test]
fn test_renderer_ignored_when_rows_exist() {
    let body = render_body(
        &people().empty_state(|| "nothing".to_string()),
        &BodyOptions::default(),
    );
    assert!(!body.text_content().contains("nothing"));
}

// ============================================================================
// Attributes and classes
// ============================================================================

#[test]
fn test_only_dom_props_are_forwarded() {
    let collection = people()
        .body_attribute("id", "people-body")
        .body_attribute("aria-label", "People")
        .body_attribute("onSomething", "ignored");
    let body = render_body(&collection, &BodyOptions::default());

    assert_eq!(body.get_attr("id"), Some("people-body"));
    assert_eq!(body.get_attr("aria-label"), Some("People"));
    assert_eq!(body.get_attr("onSomething"), None);
}

#[test]
fn test_only_labelling_aria_props_are_forwarded() {
    let collection = people()
        .body_attribute("aria-labelledby", "caption")
        .body_attribute("aria-describedby", "help")
        .body_attribute("aria-details", "notes")
        .body_attribute("aria-hidden", "true")
        .body_attribute("aria-live", "polite")
        .body_attribute("data-testid", "body");
    let body = render_body(&collection, &BodyOptions::default());

    assert_eq!(body.get_attr("aria-labelledby"), Some("caption"));
    assert_eq!(body.get_attr("aria-describedby"), Some("help"));
    assert_eq!(body.get_attr("aria-details"), Some("notes"));
    assert_eq!(body.get_attr("data-testid"), Some("body"));
    assert_eq!(body.get_attr("aria-hidden"), None);
    assert_eq!(body.get_attr("aria-live"), None);
}

#[test]
fn test_malformed_attribute_names_are_dropped() {
    let collection = Collection::new(1)
        .body_attribute("data-x\"><script>alert(1)</script", "v")
        .body_attribute("data-ok", "1");
    let body = render_body(&collection, &BodyOptions::default());

    assert_eq!(body.get_attr("data-ok"), Some("1"));
    assert_eq!(
        body.to_html(),
        "<tbody data-empty=\"true\" data-ok=\"1\" role=\"rowgroup\"></tbody>"
    );
}

#[test]
fn test_serializer_skips_invalid_names_from_any_source() {
    let node = Markup::element("td")
        .attr("data key", "a")
        .attr("on=click", "b")
        .attr("", "c")
        .attr("title", "ok");

    assert_eq!(node.to_html(), "<td title=\"ok\"></td>");
    assert!(is_attribute_name("aria-label"));
    assert!(!is_attribute_name("x'y"));
    assert!(!is_attribute_name("a/b"));
    assert!(!is_attribute_name("tab\tname"));
}

#[test]
fn test_caller_attributes_win() {
    let mut options = BodyOptions::default();
    options.attributes.insert("id".into(), "override".into());
    options.attributes.insert("role".into(), "presentation".into());
    let body = render_body(&people().body_attribute("id", "people-body"), &options);

    assert_eq!(body.get_attr("id"), Some("override"));
    assert_eq!(body.get_attr("role"), Some("presentation"));
}

#[test]
fn test_classes_are_joined_in_order() {
    let options = BodyOptions {
        slot_class: Some("tbody-base".into()),
        tbody_class: Some("striped".into()),
        class_name: Some(" compact ".into()),
        ..Default::default()
    };
    let body = render_body(&people(), &options);
    assert_eq!(body.get_attr("class"), Some("tbody-base striped compact"));

    let plain = render_body(&people(), &BodyOptions::default());
    assert_eq!(plain.get_attr("class"), None);
}

#[test]
fn test_html_is_escaped() {
    let collection = Collection::new(1).row(RowNode::new("a\"b").cell(CellNode::new("c", "<b>&")));
    let html = render_body(&collection, &BodyOptions::default()).to_html();

    assert_eq!(
        html,
        "<tbody role=\"rowgroup\"><tr data-key=\"a&quot;b\" role=\"row\">\
         <td data-key=\"c\" role=\"gridcell\">&lt;b&gt;&amp;</td></tr></tbody>"
    );
}
