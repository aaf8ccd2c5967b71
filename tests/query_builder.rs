use storefront_catalog::{
    filters::{FilterState, SortBy, SortOrder},
    query::{build_query, to_query_string},
};

fn keys(state: &FilterState) -> Vec<&'static str> {
    build_query(state).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn default_state_sends_only_paging_and_sort() {
    let state = FilterState::default();
    assert_eq!(
        to_query_string(&build_query(&state)),
        "page=1&limit=12&sortBy=createdAt&sortOrder=desc"
    );
}

#[test]
fn optional_keys_present_only_when_set() {
    // (category, search, min, max) -> expected optional keys
    let cases: Vec<(&str, &str, Option<f64>, Option<f64>, Vec<&str>)> = vec![
        ("all", "", None, None, vec![]),
        ("Cameras", "", None, None, vec!["category"]),
        ("all", "dome", None, None, vec!["search"]),
        ("all", "   ", None, None, vec![]),
        ("all", "", Some(0.0), None, vec!["min"]),
        ("all", "", None, Some(0.0), vec!["max"]),
        ("all", "", Some(10.0), Some(20.0), vec!["min", "max"]),
        (
            "Recorders",
            "nvr",
            Some(1000.0),
            Some(9000.0),
            vec!["category", "search", "min", "max"],
        ),
    ];

    for (category, search, min, max, optional) in cases {
        let mut state = FilterState::default();
        state.set_category(category);
        state.set_search_term(search);
        state.set_price_range(min, max).unwrap();

        let mut expected = optional.clone();
        expected.extend(["page", "limit", "sortBy", "sortOrder"]);
        assert_eq!(
            keys(&state),
            expected,
            "category={category:?} search={search:?} min={min:?} max={max:?}"
        );
    }
}

#[test]
fn explicit_zero_price_is_sent() {
    let mut state = FilterState::default();
    state.set_price_range(Some(0.0), Some(2500.0)).unwrap();
    assert_eq!(
        to_query_string(&build_query(&state)),
        "min=0&max=2500&page=1&limit=12&sortBy=createdAt&sortOrder=desc"
    );
}

#[test]
fn building_twice_gives_identical_output() {
    let mut state = FilterState::default();
    state.set_category("Smart Home");
    state.set_search_term("lock");
    state.set_sort_by(SortBy::Rating);
    state.set_sort_order(SortOrder::Asc);
    state.set_page(2).unwrap();

    assert_eq!(build_query(&state), build_query(&state));
    assert_eq!(
        to_query_string(&build_query(&state)),
        "category=Smart%20Home&search=lock&page=2&limit=12&sortBy=rating&sortOrder=asc"
    );
}

#[test]
fn hide_out_of_stock_never_reaches_the_query() {
    let mut hidden = FilterState::default();
    hidden.set_category("Cameras");
    hidden.set_hide_out_of_stock(true);

    let mut shown = hidden.clone();
    shown.set_hide_out_of_stock(false);

    assert_eq!(build_query(&hidden), build_query(&shown));
    let query = to_query_string(&build_query(&hidden)).to_lowercase();
    assert!(!query.contains("stock"));
    assert!(!query.contains("hide"));
}
