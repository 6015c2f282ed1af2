use growth_standards::GrowthStandards;

#[test]
fn builtin_table_listing() {
    let summary = GrowthStandards::builtin().summary();
    let listing: Vec<String> = summary
        .tables
        .iter()
        .map(|table| {
            format!(
                "{}/{}: {} points, {}-{} {}",
                table.indicator.as_code(),
                table.sex,
                table.points,
                table.key_min,
                table.key_max,
                table.indicator.key_kind().unit()
            )
        })
        .collect();

    insta::assert_json_snapshot!(listing);
}

#[test]
fn builtin_point_count() {
    let summary = GrowthStandards::builtin().summary();
    assert_eq!(summary.table_count, 8);
    assert_eq!(summary.point_count, 100);
}
