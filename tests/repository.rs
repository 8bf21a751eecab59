use diesel::RunQueryDsl;
use saaspertise::domain::company::NewCompany;
use saaspertise::domain::consultant::NewConsultant;
use saaspertise::domain::showcase::{NewCaseStudy, NewPortfolioItem};
use saaspertise::domain::testimonial::NewTestimonial;
use saaspertise::domain::types::{
    CaseStudyId, CompanyName, ConsultantId, ConsultantName, ContactEmail, ItemTitle, RegionName,
    Slug, to_slug,
};
use saaspertise::pagination::PageRequest;
use saaspertise::pricing::RateCard;
use saaspertise::repository::{
    CompanyListQuery, CompanyReader, CompanyWriter, ConsultantListQuery, ConsultantReader,
    ConsultantWriter, DieselRepository, ShowcaseReader, ShowcaseWriter,
};
use saaspertise::services::directory_import::{DirectoryExport, import_directory};

mod common;

fn company(name: &str, category: &str) -> NewCompany {
    NewCompany::new(
        CompanyName::new(name).unwrap(),
        Some(format!("https://{}.example", to_slug(name))),
        Some(category.to_string()),
        Some(format!("{name} description")),
        None,
    )
    .unwrap()
}

fn consultant(name: &str, region: &str, services: &[&str]) -> NewConsultant {
    NewConsultant::new(
        ConsultantName::new(name).unwrap(),
        ContactEmail::new(format!("{}@example.com", name.to_lowercase().replace(' ', "."))).unwrap(),
        RegionName::new(region).unwrap(),
        format!("{name} helps software teams"),
        services.iter().map(|s| s.to_string()).collect(),
        vec!["Retail".to_string()],
    )
    .approved(true)
}

#[test]
fn test_company_listing_pages_in_name_order() {
    let test_db = common::TestDb::new("test_company_listing_pages.db");
    let repo = DieselRepository::new(test_db.pool());

    let companies: Vec<NewCompany> = (1..=25)
        .rev()
        .map(|i| company(&format!("Company {i:02}"), "SaaS"))
        .collect();
    assert_eq!(repo.upsert_companies(&companies).unwrap(), 25);

    let (total, page) = repo
        .list_companies(CompanyListQuery::new(PageRequest::new(2, 10)))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "Company 11");
    assert_eq!(page[9].name, "Company 20");

    let (total, last) = repo
        .list_companies(CompanyListQuery::new(PageRequest::new(3, 10)))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(last.len(), 5);

    let (total, beyond) = repo
        .list_companies(CompanyListQuery::new(PageRequest::new(9, 10)))
        .unwrap();
    assert_eq!(total, 25);
    assert!(beyond.is_empty());
}

#[test]
fn test_company_search_and_category_filters() {
    let test_db = common::TestDb::new("test_company_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.upsert_companies(&[
        company("TechConsult Solutions", "Consulting"),
        company("FinTech Labs", "Finance"),
        company("Design Studio", "Consulting"),
        company("100% Uptime", "Hosting"),
    ])
    .unwrap();

    let (total, items) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()).search("tech"))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items[0].name, "FinTech Labs");
    assert_eq!(items[1].name, "TechConsult Solutions");

    let (total, items) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()).category("Consulting"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|c| c.category == "Consulting"));

    let (total, _) = repo
        .list_companies(
            CompanyListQuery::new(PageRequest::default())
                .search("tech")
                .category("Consulting"),
        )
        .unwrap();
    assert_eq!(total, 1);

    let (total, items) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()).search("100%"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "100% Uptime");

    let (total, _) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()).search("%"))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_company_search_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_company_unicode_search.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.upsert_companies(&[company("Éclair Labs", "Food"), company("Eclipse Data", "Data")])
        .unwrap();

    for term in ["éclair", "ÉCLAIR", "Éclair"] {
        let (total, items) = repo
            .list_companies(CompanyListQuery::new(PageRequest::default()).search(term))
            .unwrap();
        assert_eq!(total, 1, "search {term:?}");
        assert_eq!(items[0].name, "Éclair Labs");
    }
}

#[test]
fn test_company_upsert_and_slug_lookup() {
    let test_db = common::TestDb::new("test_company_upsert.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.upsert_companies(&[company("Acme Analytics", "Analytics")])
        .unwrap();
    repo.upsert_companies(&[company("Acme Analytics", "Data")])
        .unwrap();

    let (total, _) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()))
        .unwrap();
    assert_eq!(total, 1);

    let slug = Slug::parse("ACME-analytics").unwrap();
    let found = repo.get_company_by_slug(&slug).unwrap().unwrap();
    assert_eq!(found.name.as_str(), "Acme Analytics");
    assert_eq!(found.category, "Data");
    assert_eq!(found.slug.as_str(), "acme-analytics");

    let missing = Slug::parse("nobody").unwrap();
    assert!(repo.get_company_by_slug(&missing).unwrap().is_none());

    let entries = repo.list_sitemap_entries(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].slug, "acme-analytics");
    assert!(repo.list_sitemap_entries(0).unwrap().is_empty());
}

#[test]
fn test_consultant_tags_round_trip_as_lists() {
    let test_db = common::TestDb::new("test_consultant_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_consultant(&consultant("Ada Advisory", "London", &["Strategy", "Cloud"]))
        .unwrap();
    assert_eq!(created.services, vec!["Strategy", "Cloud"]);
    assert_eq!(created.industries, vec!["Retail"]);

    let mut conn = test_db.pool().get().unwrap();
    diesel::sql_query(
        "INSERT INTO consultants (name, description, email, region, services, industries, is_approved) \
         VALUES ('Broken Tags', 'desc', 'b@example.com', 'Leeds', 'not json', NULL, 1)",
    )
    .execute(&mut conn)
    .unwrap();

    let (total, items) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)))
        .unwrap();
    assert_eq!(total, 2);
    let broken = items.iter().find(|c| c.name == "Broken Tags").unwrap();
    assert!(broken.services.is_empty());
    assert!(broken.industries.is_empty());

    let fetched = repo.get_consultant_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched.services, created.services);
}

#[test]
fn test_consultant_filters_and_ordering() {
    let test_db = common::TestDb::new("test_consultant_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let ada = repo
        .create_consultant(&consultant("Ada Advisory", "London", &["Strategy"]))
        .unwrap();
    let bob = repo
        .create_consultant(&consultant("Bob Builds", "Greater London", &["Cloud"]).featured(true))
        .unwrap();
    repo.create_consultant(&consultant("Cy Hidden", "Leeds", &["Cloud"]).approved(false))
        .unwrap();

    let (total, items) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items[0].id, bob.id);
    assert_eq!(items[1].id, ada.id);

    let (total, _) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).include_unapproved())
        .unwrap();
    assert_eq!(total, 3);

    let (total, items) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).featured_only())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, bob.id);

    let (total, _) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).region("london"))
        .unwrap();
    assert_eq!(total, 2);

    let (total, items) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).expertise("Cloud"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, bob.id);

    // Tags match whole entries only.
    let (total, _) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).expertise("Clo"))
        .unwrap();
    assert_eq!(total, 0);

    let (total, items) = repo
        .list_consultants(
            ConsultantListQuery::new(PageRequest::new(1, 20))
                .search("advisory")
                .expertise("Strategy"),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, ada.id);

    // A search replaces the expertise filter rather than narrowing it.
    let (total, items) = repo
        .list_consultants(
            ConsultantListQuery::new(PageRequest::new(1, 20))
                .search("advisory")
                .expertise("Cloud"),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, ada.id);

    let (total, items) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).search("BOB"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, bob.id);
}

#[test]
fn test_consultant_search_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_consultant_unicode_search.db");
    let repo = DieselRepository::new(test_db.pool());

    let zoe = repo
        .create_consultant(
            &NewConsultant::new(
                ConsultantName::new("Zoë Ørsted").unwrap(),
                ContactEmail::new("zoe@example.com").unwrap(),
                RegionName::new("Århus").unwrap(),
                "Grid planning".to_string(),
                vec!["Énergie".to_string()],
                Vec::new(),
            )
            .approved(true),
        )
        .unwrap();

    for query in [
        ConsultantListQuery::new(PageRequest::new(1, 20)).search("ZOË"),
        ConsultantListQuery::new(PageRequest::new(1, 20)).search("énergie"),
        ConsultantListQuery::new(PageRequest::new(1, 20)).region("ÅRHUS"),
        ConsultantListQuery::new(PageRequest::new(1, 20)).expertise("ÉNERGIE"),
    ] {
        let (total, items) = repo.list_consultants(query).unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].id, zoe.id);
    }
}

#[test]
fn test_only_approved_testimonials_are_listed() {
    let test_db = common::TestDb::new("test_testimonials.db");
    let repo = DieselRepository::new(test_db.pool());

    let ada = repo
        .create_consultant(
            &consultant("Ada Advisory", "London", &["Strategy"]).rates(RateCard {
                hourly_rate: Some(9500),
                project_rate_min: None,
                project_rate_max: None,
                show_rates: true,
            }),
        )
        .unwrap();
    assert_eq!(ada.hourly_rate, Some(9500));

    repo.create_testimonial(ada.id, &NewTestimonial::new("Ann".into(), "Great".into(), 5, true))
        .unwrap();
    repo.create_testimonial(ada.id, &NewTestimonial::new("Bo".into(), "Good".into(), 4, true))
        .unwrap();
    repo.create_testimonial(ada.id, &NewTestimonial::new("Cy".into(), "Spam".into(), 1, false))
        .unwrap();

    let testimonials = repo.list_approved_testimonials(&[ada.id]).unwrap();
    assert_eq!(testimonials.len(), 2);
    assert!(testimonials.iter().all(|t| t.is_approved));

    assert!(repo.list_approved_testimonials(&[]).unwrap().is_empty());
    let stranger = ConsultantId::new(999).unwrap();
    assert!(repo.list_approved_testimonials(&[stranger]).unwrap().is_empty());
}

#[test]
fn test_testimonial_requires_existing_consultant() {
    let test_db = common::TestDb::new("test_testimonial_fk.db");
    let repo = DieselRepository::new(test_db.pool());

    let stranger = ConsultantId::new(42).unwrap();
    let result =
        repo.create_testimonial(stranger, &NewTestimonial::new("Ann".into(), "Hi".into(), 5, true));
    assert!(result.is_err());
}

fn case_study(title: &str) -> NewCaseStudy {
    NewCaseStudy::new(
        ItemTitle::new(title).unwrap(),
        format!("{title} overview"),
        "Legacy reporting".to_string(),
        "Cloud data platform".to_string(),
        "Reports in minutes".to_string(),
        vec!["Snowflake".to_string()],
    )
}

fn portfolio_item(title: &str, order: i32) -> NewPortfolioItem {
    NewPortfolioItem::new(
        ItemTitle::new(title).unwrap(),
        format!("{title} delivery"),
        vec!["Rust".to_string()],
    )
    .display_order(order)
}

#[test]
fn test_showcase_lists_only_public_records_in_order() {
    let test_db = common::TestDb::new("test_showcase.db");
    let repo = DieselRepository::new(test_db.pool());

    let ada = repo
        .create_consultant(&consultant("Ada Advisory", "London", &["Strategy"]))
        .unwrap();

    let first = repo.create_case_study(ada.id, &case_study("First")).unwrap();
    let second = repo.create_case_study(ada.id, &case_study("Second")).unwrap();
    let hidden = repo
        .create_case_study(ada.id, &case_study("Hidden").public(false))
        .unwrap();
    assert_eq!(first.technologies, vec!["Snowflake"]);

    repo.create_portfolio_item(ada.id, &portfolio_item("Later", 2))
        .unwrap();
    repo.create_portfolio_item(ada.id, &portfolio_item("Earlier", 1))
        .unwrap();
    repo.create_portfolio_item(ada.id, &portfolio_item("Private", 0).public(false))
        .unwrap();

    let studies = repo.list_public_case_studies(&[ada.id]).unwrap();
    let ids: Vec<CaseStudyId> = studies.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let items = repo.list_public_portfolio_items(&[ada.id]).unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Earlier", "Later"]);

    let found = repo.get_case_study_by_id(hidden.id).unwrap().unwrap();
    assert!(!found.is_public);
    let missing = CaseStudyId::new(999).unwrap();
    assert!(repo.get_case_study_by_id(missing).unwrap().is_none());
    assert!(repo.list_public_case_studies(&[]).unwrap().is_empty());
}

fn directory_export() -> DirectoryExport {
    serde_json::from_str(
        r#"{
            "companies": [
                {"name": "Acme Analytics", "category": "Data"}
            ],
            "consultants": [
                {
                    "name": "Ada Advisory", "email": "ada@example.com", "region": "London",
                    "description": "Cloud strategy", "services": ["Cloud"], "isApproved": true,
                    "testimonials": [
                        {"authorName": "Ann", "content": "Great", "rating": 5, "isApproved": true},
                        {"authorName": "Bo", "content": "Good", "rating": 4, "isApproved": true}
                    ],
                    "caseStudies": [{"title": "ERP rollout", "results": "Two-day close"}],
                    "portfolioItems": [{"title": "Chatbot"}, {"title": "Data lake", "displayOrder": 1}]
                },
                {"name": "Bad Email", "email": "not-an-email", "region": "Leeds"}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_reimporting_an_export_keeps_counts() {
    let test_db = common::TestDb::new("test_reimport.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = import_directory(&repo, directory_export()).unwrap();
    assert_eq!(first.consultants, 1);
    assert_eq!(first.testimonials, 2);
    assert_eq!(first.skipped, 1);

    let second = import_directory(&repo, directory_export()).unwrap();
    assert_eq!(second, first);

    let (total, consultants) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)).include_unapproved())
        .unwrap();
    assert_eq!(total, 1);
    let ada = consultants[0].id;

    assert_eq!(repo.list_approved_testimonials(&[ada]).unwrap().len(), 2);
    assert_eq!(repo.list_public_case_studies(&[ada]).unwrap().len(), 1);
    assert_eq!(repo.list_public_portfolio_items(&[ada]).unwrap().len(), 2);

    let (companies, _) = repo
        .list_companies(CompanyListQuery::new(PageRequest::default()))
        .unwrap();
    assert_eq!(companies, 1);
}

#[test]
fn test_reimport_updates_profile_in_place() {
    let test_db = common::TestDb::new("test_reimport_update.db");
    let repo = DieselRepository::new(test_db.pool());

    import_directory(&repo, directory_export()).unwrap();
    let mut export = directory_export();
    export.consultants[0].region = "Bristol".to_string();
    export.consultants[0].testimonials.truncate(1);
    import_directory(&repo, export).unwrap();

    let (total, consultants) = repo
        .list_consultants(ConsultantListQuery::new(PageRequest::new(1, 20)))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(consultants[0].region, "Bristol");
    assert_eq!(
        repo.list_approved_testimonials(&[consultants[0].id])
            .unwrap()
            .len(),
        1
    );
}
