//! End-to-end extraction tests.
//!
//! These exercise the full pipeline through [`parse_query`], validating the
//! cross-pass behavior the unit tests cannot: pass ordering, cross-field
//! assembly, and the bilingual equivalence of whole phrases.

use aqari::{
    Amenity, City, ExtractError, ExtractedFilter, ListingStatus, PropertyType, ViewType,
    parse_query,
};

fn parse(input: &str) -> ExtractedFilter {
    parse_query(input).unwrap()
}

#[test]
fn deterministic_across_calls() {
    let input = "شقة غرفتين حمامين في حلب بحدود 50 الف دولار مع بلكون";
    let first = parse(input);
    for _ in 0..10 {
        assert_eq!(parse(input), first);
    }
}

#[test]
fn arabic_indic_numerals_equal_ascii() {
    assert_eq!(parse("شقة ٣ غرف"), parse("شقة 3 غرف"));
    assert_eq!(parse("شقة ۳ غرف"), parse("شقة 3 غرف"));
    assert_eq!(parse("شقة ٣ غرف").bedrooms, Some(3));
}

#[test]
fn salon_adjustment() {
    assert_eq!(parse("شقة غرفتين وصالون").bedrooms, Some(3));
    assert_eq!(parse("شقة صالون").bedrooms, Some(2));
    assert_eq!(parse("شقة ثلاث غرف وصالة").bedrooms, Some(4));
}

#[test]
fn utility_defaults_one_bathroom() {
    assert_eq!(parse("شقة منافع").bathrooms, Some(1));
    assert_eq!(parse("شقة حمامين ومنافع").bathrooms, Some(2));
}

#[test]
fn price_branches_are_exclusive() {
    let range = parse("villa between 150000 and 300000 usd");
    assert_eq!(range.price_min, Some(150_000.0));
    assert_eq!(range.price_max, Some(300_000.0));

    let upper = parse("villa under 300000 usd");
    assert_eq!(upper.price_min, None);
    assert_eq!(upper.price_max, Some(300_000.0));

    let lower = parse("villa over 150000 usd");
    assert_eq!(lower.price_min, Some(150_000.0));
    assert_eq!(lower.price_max, None);
}

#[test]
fn size_branches_are_exclusive() {
    let range = parse("شقة بين 100 و 150 متر");
    assert_eq!(range.size_min, Some(100.0));
    assert_eq!(range.size_max, Some(150.0));

    let bare = parse("شقة 120 متر");
    assert_eq!(bare.size_min, None);
    assert_eq!(bare.size_max, Some(120.0));
}

#[test]
fn price_and_size_coexist() {
    let filter = parse("villa between 100000 and 200000 usd between 100 and 200 sqm");
    assert_eq!(filter.price_min, Some(100_000.0));
    assert_eq!(filter.price_max, Some(200_000.0));
    assert_eq!(filter.size_min, Some(100.0));
    assert_eq!(filter.size_max, Some(200.0));
}

#[test]
fn hama_collision_guard() {
    assert_eq!(parse("شقة حمام").city, None);
    assert_eq!(parse("شقة غرفتين حمامين").city, None);
    assert_eq!(parse("شقة في حماة").city, Some(City::Hama));
}

#[test]
fn bilingual_equivalence() {
    let en = parse("villa for sale in damascus");
    let ar = parse("فيلا للبيع في دمشق");
    assert_eq!(en.property_type, ar.property_type);
    assert_eq!(en.status, ar.status);
    assert_eq!(en.city, ar.city);
    assert_eq!(en.property_type, Some(PropertyType::Villa));
    assert_eq!(en.status, Some(ListingStatus::Sale));
    assert_eq!(en.city, Some(City::Damascus));
}

#[test]
fn scenario_arabic_rooms_and_city() {
    let filter = parse("شقة غرفتين حمامين في حلب");
    assert_eq!(filter.property_type, Some(PropertyType::Apartment));
    assert_eq!(filter.bedrooms, Some(2));
    assert_eq!(filter.bathrooms, Some(2));
    assert_eq!(filter.city, Some(City::Aleppo));
    assert_eq!(filter.status, None);
}

#[test]
fn scenario_english_sale_with_range() {
    let filter = parse("villa for sale in Damascus between 150000 and 300000 usd");
    assert_eq!(filter.property_type, Some(PropertyType::Villa));
    assert_eq!(filter.status, Some(ListingStatus::Sale));
    assert_eq!(filter.city, Some(City::Damascus));
    assert_eq!(filter.price_min, Some(150_000.0));
    assert_eq!(filter.price_max, Some(300_000.0));
}

#[test]
fn scenario_approximate_price() {
    let filter = parse("شقة بحدود 50 الف دولار");
    assert_eq!(filter.property_type, Some(PropertyType::Apartment));
    assert_eq!(filter.price_max, Some(50_000.0));
    assert_eq!(filter.price_min, None);
}

#[test]
fn scenario_empty_query() {
    assert!(matches!(parse_query(""), Err(ExtractError::EmptyQuery)));
    assert!(matches!(parse_query("  \t "), Err(ExtractError::EmptyQuery)));
}

#[test]
fn scenario_over_length_query() {
    let long = "x".repeat(501);
    assert!(matches!(
        parse_query(&long),
        Err(ExtractError::QueryTooLong { length: 501, max: 500 })
    ));
}

#[test]
fn code_switched_phrase() {
    let filter = parse("furnished شقة للايجار في المزة with balcony");
    assert_eq!(filter.property_type, Some(PropertyType::Apartment));
    assert_eq!(filter.status, Some(ListingStatus::Rent));
    assert_eq!(filter.neighborhood.as_deref(), Some("Mezzeh"));
    assert_eq!(filter.furnished, Some(true));
    assert_eq!(filter.amenities, vec![Amenity::Balcony]);
}

#[test]
fn natural_view_phrase_is_not_a_sale() {
    let filter = parse("شقة مع اطلالة طبيعية");
    assert_eq!(filter.status, None);
    assert_eq!(filter.view_type, Some(ViewType::Generic));
}

#[test]
fn personal_name_is_not_a_neighborhood() {
    assert_eq!(parse("شقة شارع حمزة").neighborhood, None);
    assert_eq!(parse("شقة بالمزة").neighborhood.as_deref(), Some("Mezzeh"));
}

#[test]
fn rent_precedes_sale_when_both_present() {
    assert_eq!(
        parse("شقة للايجار او للبيع").status,
        Some(ListingStatus::Rent)
    );
}

#[test]
fn view_and_keywords_survive_the_full_pipeline() {
    let filter = parse("فيلا سوبر ديلوكس مع اطلالة بحرية");
    assert_eq!(filter.view_type, Some(ViewType::Sea));
    assert_eq!(filter.keywords, vec!["super-deluxe"]);
}

#[test]
fn unmatched_query_yields_empty_filter() {
    let filter = parse("قطعة اثاث قديمة");
    assert!(filter.is_empty());
}

#[test]
fn json_shape_uses_camel_case() {
    let filter = parse("شقة غرفتين في دمشق").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&filter).unwrap();
    assert_eq!(value["propertyType"], "apartment");
    assert_eq!(value["bedrooms"], 2);
    assert_eq!(value["city"], "damascus");
}
