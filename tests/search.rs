use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Text};
use pushkind_search::domain::contact::{ContactSearchCriteria, NewContact};
use pushkind_search::domain::criteria::{SearchCriteria, Sort};
use pushkind_search::dto::search::SearchPageSettings;
use pushkind_search::models::contact::Contact as DbContact;
use pushkind_search::query::QueryBuilder;
use pushkind_search::repository::SearchExecutor;
use pushkind_search::repository::contact::ContactWriter;
use pushkind_search::repository::errors::RepositoryError;
use pushkind_search::services::contacts::{ContactSearchService, load_contacts_page};
use pushkind_search::services::search::{SearchService, search};

mod common;

const SELECT: &str = "select e.* from contacts e";
const SELECT_COUNT: &str = "select count(e.id) from contacts e";

#[test]
fn test_count_and_fetch_bind_named_parameters() {
    let test_db = common::TestDb::new("test_count_and_fetch_bind_named_parameters.db");
    let repo = test_db.repo();
    common::seed_contacts(&repo, 25);

    let builder = QueryBuilder::new(SELECT, SELECT_COUNT)
        .and_where("e.id > :min_id")
        .and_where("e.name like :name")
        .with_parameter("min_id", 10)
        .with_parameter("name", "Contact 1%")
        .order_by("e.id asc");

    let total = SearchExecutor::<DbContact>::count(&repo, &builder.build_count_query()).unwrap();
    assert_eq!(total, 9);

    let rows: Vec<DbContact> = repo.fetch(&builder.build_query(), 2, 3).unwrap();
    let ids = rows.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![13, 14, 15]);
}

#[test]
fn test_misspelled_parameter_is_rejected() {
    let test_db = common::TestDb::new("test_misspelled_parameter_is_rejected.db");
    let repo = test_db.repo();

    let builder = QueryBuilder::new(SELECT, SELECT_COUNT)
        .and_where("e.name = :foo")
        .with_parameter("fao", "bar");

    let result = SearchExecutor::<DbContact>::count(&repo, &builder.build_count_query());
    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));

    let result: Result<Vec<DbContact>, _> = repo.fetch(&builder.build_query(), 0, 10);
    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
}

#[test]
fn test_malformed_fragment_surfaces_database_error() {
    let test_db = common::TestDb::new("test_malformed_fragment_surfaces_database_error.db");
    let repo = test_db.repo();

    let builder = QueryBuilder::new(SELECT, SELECT_COUNT).and_where("e.name ==== 'x'");

    let result = search::<DbContact, _>(&repo, &SearchCriteria::default(), builder);
    assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
}

#[derive(QueryableByName)]
struct NameCount {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = BigInt)]
    occurrences: i64,
}

#[test]
fn test_group_by_query() {
    let test_db = common::TestDb::new("test_group_by_query.db");
    let repo = test_db.repo();
    let contacts = ["Alice", "Bob", "Alice", "Carol", "Alice", "Bob"]
        .iter()
        .map(|name| NewContact::new(name.to_string(), None, None))
        .collect::<Vec<_>>();
    repo.create_contacts(&contacts).unwrap();

    let builder = QueryBuilder::new(
        "select e.name as name, count(e.id) as occurrences from contacts e",
        "select count(distinct e.name) from contacts e",
    )
    .and_where("e.name <> :excluded")
    .with_parameter("excluded", "Carol")
    .group_by("e.name");

    let criteria = SearchCriteria::default().order_by("occurrences", Sort::Desc);
    let results = search::<NameCount, _>(&repo, &criteria, builder).unwrap();

    assert_eq!(results.total, 2);
    assert_eq!(results.items.len(), 2);
    assert_eq!(results.items[0].name, "Alice");
    assert_eq!(results.items[0].occurrences, 3);
    assert_eq!(results.items[1].name, "Bob");
    assert_eq!(results.items[1].occurrences, 2);
}

#[test]
fn test_contact_search_service_pages_and_orders() {
    let test_db = common::TestDb::new("test_contact_search_service_pages_and_orders.db");
    let repo = test_db.repo();
    common::seed_contacts(&repo, 25);

    let criteria = ContactSearchCriteria {
        criteria: SearchCriteria::default()
            .paginate(2, 10)
            .order_by("e.name", Sort::Desc),
        ..ContactSearchCriteria::default()
    };

    let results = ContactSearchService::new(&repo).search(&criteria).unwrap();

    assert_eq!(results.total, 25);
    assert_eq!(results.items.len(), 10);
    assert_eq!(results.items[0].name, "Contact 15");
    assert_eq!(results.items[9].name, "Contact 06");
}

#[test]
fn test_contact_search_service_filters_case_insensitively() {
    let test_db = common::TestDb::new("test_contact_search_service_filters.db");
    let repo = test_db.repo();
    common::seed_contacts(&repo, 25);

    let criteria = ContactSearchCriteria::default()
        .name("CONTACT 2*")
        .email("example");

    let results = ContactSearchService::new(&repo).search(&criteria).unwrap();

    assert_eq!(results.total, 6);
    assert!(
        results
            .items
            .iter()
            .all(|contact| contact.name.starts_with("Contact 2"))
    );
}

#[test]
fn test_contacts_page_presents_last_page() {
    let test_db = common::TestDb::new("test_contacts_page_presents_last_page.db");
    let repo = test_db.repo();
    common::seed_contacts(&repo, 25);

    let criteria = ContactSearchCriteria {
        criteria: SearchCriteria::default().paginate(3, 10),
        ..ContactSearchCriteria::default()
    };

    let page =
        load_contacts_page(&repo, Some(criteria), false, &SearchPageSettings::default()).unwrap();

    let window = page.results.window;
    assert_eq!(page.results.total, 25);
    assert_eq!(page.results.items.len(), 5);
    assert_eq!(window.number_of_pages, 3);
    assert_eq!(window.start_page, 1);
    assert_eq!(window.end_page, 3);
    assert_eq!(window.next_page, 3);
    assert_eq!(window.previous_page, 2);
    assert_eq!(window.first_result, 21);
    assert_eq!(window.last_result, 25);
}
