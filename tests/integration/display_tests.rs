//! Display integration tests
//!
//! Run whole MODS records through the public API.

use mods_display::{
    render_xml, DisplayConfig, DisplayError, DisplayField, FieldConfig, FieldKind, ModsDisplayHtml,
    ModsRecord,
};

const RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mods xmlns="http://www.loc.gov/mods/v3" xmlns:xlink="http://www.w3.org/1999/xlink" version="3.4">
  <titleInfo>
    <nonSort>The</nonSort>
    <title>world atlas</title>
    <subTitle>physical and political</subTitle>
  </titleInfo>
  <titleInfo type="alternative">
    <title>Atlas of the world</title>
  </titleInfo>
  <language>
    <languageTerm type="code" authority="iso639-2b">eng</languageTerm>
  </language>
  <physicalDescription>
    <extent>1 atlas (120 p.)</extent>
    <digitalOrigin>reformatted digital</digitalOrigin>
  </physicalDescription>
  <subject>
    <cartographics>
      <scale>Scale 1:1,000,000</scale>
      <coordinates>(W 180°--E 180°/N 90°--S 90°)</coordinates>
    </cartographics>
  </subject>
  <relatedItem type="host">
    <titleInfo><title>Map collection</title></titleInfo>
    <typeOfResource collection="yes"/>
  </relatedItem>
  <relatedItem>
    <titleInfo><title>Library</title></titleInfo>
    <location><url>http://library.stanford.edu</url></location>
  </relatedItem>
  <relatedItem>
    <titleInfo><title>SDR</title></titleInfo>
    <location><url>http://purl.stanford.edu</url></location>
  </relatedItem>
  <accessCondition type="useAndReproduction">Available for research use.</accessCondition>
  <accessCondition type="license" xlink:href="https://creativecommons.org/licenses/by/4.0/legalcode">CC BY</accessCondition>
</mods>"#;

fn record() -> ModsRecord {
    ModsRecord::parse(RECORD).expect("record parses")
}

#[test]
fn test_collection_related_item_never_displays() {
    let record = record();
    let config = DisplayConfig::default();
    let display = ModsDisplayHtml::new(&record, &config);

    let related = display.fields(FieldKind::RelatedItem);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].label, "Related item:");
    assert_eq!(
        related[0].values,
        vec![
            "<a href='http://library.stanford.edu'>Library</a>",
            "<a href='http://purl.stanford.edu'>SDR</a>",
        ]
    );
    assert!(!display.to_html().contains("Map collection"));
}

#[test]
fn test_full_record_html() {
    let record = record();
    let config = DisplayConfig::default();
    let html = ModsDisplayHtml::new(&record, &config).to_html();

    assert!(html.starts_with("<dl>"));
    assert!(html.ends_with("</dl>"));
    assert!(html.contains(
        "<dt title='Title'>Title:</dt><dd>The world atlas : physical and political</dd>"
    ));
    assert!(html.contains("<dt title='Alternative title'>Alternative title:</dt><dd>Atlas of the world</dd>"));
    assert!(html.contains("<dt title='Language'>Language:</dt><dd>English</dd>"));
    assert!(html.contains("<dt title='Extent'>Extent:</dt><dd>1 atlas (120 p.)</dd>"));
    assert!(html.contains(
        "<dt title='Map data'>Map data:</dt><dd>Scale 1:1,000,000 ; (W 180°--E 180°/N 90°--S 90°)</dd>"
    ));
    assert!(html.contains(
        "<dd><a href='http://library.stanford.edu'>Library</a><br/><a href='http://purl.stanford.edu'>SDR</a></dd>"
    ));

    // Access conditions are hidden unless configured
    assert!(!html.contains("License"));
    assert!(!html.contains("Use and reproduction"));

    // Display order: title before language before related items
    let title = html.find("Title:").unwrap();
    let language = html.find("Language:").unwrap();
    let related = html.find("Related item:").unwrap();
    assert!(title < language && language < related);
}

#[test]
fn test_access_conditions_display_when_configured() {
    let record = record();
    let mut config = DisplayConfig::default();
    config.access_condition = FieldConfig::ignored().display();

    let html = ModsDisplayHtml::new(&record, &config)
        .field_html(FieldKind::AccessCondition)
        .unwrap();

    assert_eq!(
        html,
        "<dt title='Use and reproduction'>Use and reproduction:</dt><dd>Available for research use.</dd>\
         <dt title='License'>License:</dt><dd><div class='cc-by'><a href='https://creativecommons.org/licenses/by/4.0/'>\
         This work is licensed under a CC-BY-4.0 Attribution International</a></div></dd>"
    );
}

#[test]
fn test_access_conditions_from_toml_config() {
    let config = DisplayConfig::from_toml(
        r#"
        [access_condition]
        ignore = false
        label_class = "access-label"
        "#,
    )
    .unwrap();

    let html = render_xml(
        r#"<mods><accessCondition>Access Condition Note</accessCondition></mods>"#,
        &config,
    )
    .unwrap();

    assert_eq!(
        html,
        "<dl><dt class='access-label' title='Access condition'>Access condition:</dt><dd>Access Condition Note</dd></dl>"
    );
}

#[test]
fn test_title_and_body() {
    let record = record();
    let config = DisplayConfig::default();
    let display = ModsDisplayHtml::new(&record, &config);

    assert_eq!(display.title(), vec!["The world atlas : physical and political"]);

    let body = display.body();
    assert!(!body.contains("The world atlas"));
    assert!(body.contains("Atlas of the world"));
    assert!(body.contains("Language:"));
}

#[test]
fn test_all_fields_skip_ignored_types() {
    let record = record();
    let config = DisplayConfig::default();
    let fields = ModsDisplayHtml::new(&record, &config).all_fields();

    assert!(fields.iter().all(|(kind, _)| *kind != FieldKind::AccessCondition));
    assert_eq!(fields[0].0, FieldKind::Title);
    assert_eq!(
        fields[0].1,
        DisplayField::single("Title:", "The world atlas : physical and political".to_string())
    );
}

#[test]
fn test_record_without_fields() {
    let html = render_xml("<mods><genre>map</genre></mods>", &DisplayConfig::default()).unwrap();
    assert_eq!(html, "<dl></dl>");
}

#[test]
fn test_label_override_from_config() {
    let mut config = DisplayConfig::default();
    config.related_item.label = Some("See also".to_string());

    let record = ModsRecord::parse(
        r#"<mods>
            <relatedItem displayLabel="Part of"><titleInfo>Series A</titleInfo></relatedItem>
            <relatedItem><location>Special Collections</location></relatedItem>
        </mods>"#,
    )
    .unwrap();

    let fields = ModsDisplayHtml::new(&record, &config).fields(FieldKind::RelatedItem);
    assert_eq!(
        fields,
        vec![DisplayField::new(
            "See also:",
            vec!["Series A".to_string(), "Special Collections".to_string()]
        )]
    );
}

#[test]
fn test_malformed_xml_is_an_error() {
    let result = render_xml("<mods><titleInfo>", &DisplayConfig::default());
    assert!(matches!(result, Err(DisplayError::Xml(_))));
}

#[test]
fn test_autolinked_notes_stay_well_formed() {
    let html = render_xml(
        r#"<mods>
            <physicalDescription>
                <note>See &lt;http://example.com/a&gt; for scans</note>
                <note>http://example.com/it's/here</note>
            </physicalDescription>
        </mods>"#,
        &DisplayConfig::default(),
    )
    .unwrap();

    assert_eq!(
        html,
        "<dl><dt title='Note'>Note:</dt><dd>\
         See &lt;<a href='http://example.com/a'>http://example.com/a</a>&gt; for scans<br/>\
         <a href='http://example.com/it%27s/here'>http://example.com/it&#39;s/here</a>\
         </dd></dl>"
    );
}

#[test]
fn test_unknown_license_code_is_not_linked_into_its_class() {
    let mut config = DisplayConfig::default();
    config.access_condition = FieldConfig::ignored().display();

    let html = render_xml(
        r#"<mods><accessCondition type="license">example.com/x y: terms</accessCondition></mods>"#,
        &config,
    )
    .unwrap();

    assert_eq!(
        html,
        "<dl><dt title='License'>License:</dt><dd><div class='example.com/x-y'>terms</div></dd></dl>"
    );
}

#[test]
fn test_link_template_on_access_conditions() {
    let mut config = DisplayConfig::default();
    config.access_condition = FieldConfig {
        link: Some("/search?q=%value%".to_string()),
        ..FieldConfig::ignored().display()
    };

    let record = ModsRecord::parse(
        r#"<mods xmlns:xlink="http://www.w3.org/1999/xlink">
            <accessCondition type="license">XYZ abc: Some terms</accessCondition>
            <accessCondition type="license" xlink:href="http://creativecommons.org/licenses/by/4.0/">CC BY</accessCondition>
        </mods>"#,
    )
    .unwrap();

    let html = ModsDisplayHtml::new(&record, &config)
        .field_html(FieldKind::AccessCondition)
        .unwrap();

    assert_eq!(
        html,
        "<dt title='License'>License:</dt><dd>\
         <div class='xyz-abc'><a href='/search?q=Some%20terms'>Some terms</a></div><br/>\
         <div class='cc-by'><a href='https://creativecommons.org/licenses/by/4.0/'>\
         This work is licensed under a CC-BY-4.0 Attribution International</a></div></dd>"
    );
}
