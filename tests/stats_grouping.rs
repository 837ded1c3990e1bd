use salary_charts::models::{CompanySize, ExperienceLevel, Record};
use salary_charts::stats::{company_size_counts, count_by, mean_by, mean_salary_by_experience};

fn rec(year: i32, exp: &str, size: &str, salary: Option<f64>, remote: f64) -> Record {
    Record {
        work_year: Some(f64::from(year)),
        experience_level: exp.into(),
        company_size: size.into(),
        salary_in_usd: salary,
        remote_ratio: Some(remote),
    }
}

fn three_records() -> Vec<Record> {
    vec![
        rec(2022, "EN", "S", Some(50000.0), 0.0),
        rec(2022, "SE", "M", Some(150000.0), 100.0),
        rec(2023, "EN", "S", Some(60000.0), 50.0),
    ]
}

#[test]
fn counts_and_means_for_three_records() {
    let rows = three_records();

    let sizes = company_size_counts(&rows);
    assert_eq!(sizes.keys(), vec![CompanySize::Small, CompanySize::Medium]);
    assert_eq!(sizes.get(&CompanySize::Small), Some(2.0));
    assert_eq!(sizes.get(&CompanySize::Medium), Some(1.0));
    assert_eq!(sizes.get(&CompanySize::Large), None);

    let means = mean_salary_by_experience(&rows);
    assert_eq!(
        means.keys(),
        vec![ExperienceLevel::Entry, ExperienceLevel::Senior]
    );
    assert!((means.get(&ExperienceLevel::Entry).unwrap() - 55000.0).abs() < 1e-9);
    assert!((means.get(&ExperienceLevel::Senior).unwrap() - 150000.0).abs() < 1e-9);
}

#[test]
fn count_groups_sum_to_record_count() {
    let codes = ["M", "L", "S", "M", "M", "L", "S", "S", "S"];
    let rows: Vec<Record> = codes
        .iter()
        .enumerate()
        .map(|(i, c)| rec(2020 + (i as i32 % 3), "MI", c, Some(1000.0 * i as f64), 0.0))
        .collect();
    let sizes = company_size_counts(&rows);
    assert_eq!(sizes.total() as usize, rows.len());
    // discovery order, not canonical order
    assert_eq!(
        sizes.keys(),
        vec![CompanySize::Medium, CompanySize::Large, CompanySize::Small]
    );
}

#[test]
fn means_follow_canonical_order_regardless_of_input_order() {
    let rows = vec![
        rec(2021, "EX", "L", Some(300.0), 0.0),
        rec(2021, "SE", "L", Some(200.0), 0.0),
        rec(2021, "MI", "L", Some(120.0), 0.0),
        rec(2021, "EN", "L", Some(80.0), 0.0),
        rec(2021, "MI", "L", Some(100.0), 0.0),
        rec(2021, "EX", "L", Some(500.0), 0.0),
    ];
    let means = mean_salary_by_experience(&rows);
    assert_eq!(means.keys(), ExperienceLevel::ALL.to_vec());

    // reference check against a plain per-group mean
    for level in ExperienceLevel::ALL {
        let vals: Vec<f64> = rows
            .iter()
            .filter(|r| r.experience() == Some(level))
            .filter_map(|r| r.salary_in_usd)
            .collect();
        let expected = vals.iter().sum::<f64>() / vals.len() as f64;
        assert!((means.get(&level).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn unknown_categories_and_missing_values_are_left_out() {
    let rows = vec![
        rec(2021, "EN", "XL", Some(10.0), 0.0),
        rec(2021, "??", "S", Some(99.0), 0.0),
        rec(2021, "EN", "S", None, 0.0),
        rec(2021, "MI", "S", None, 0.0),
    ];
    let sizes = company_size_counts(&rows);
    assert_eq!(sizes.total(), 3.0);

    let means = mean_salary_by_experience(&rows);
    // MI has no defined salary at all, so it produces no group
    assert_eq!(means.keys(), vec![ExperienceLevel::Entry]);
    assert_eq!(means.get(&ExperienceLevel::Entry), Some(10.0));
}

#[test]
fn empty_input_gives_empty_summaries() {
    let rows: Vec<Record> = Vec::new();
    assert!(count_by(&rows, Record::company_size).is_empty());
    assert!(mean_by(&rows, Record::experience, |r| r.salary_in_usd).is_empty());
}

#[test]
fn non_finite_salaries_do_not_poison_the_mean() {
    let rows = vec![
        rec(2022, "EN", "S", Some(f64::INFINITY), 0.0),
        rec(2022, "EN", "S", Some(40000.0), 0.0),
        rec(2022, "EX", "L", Some(f64::NEG_INFINITY), 0.0),
    ];
    let means = mean_salary_by_experience(&rows);
    assert_eq!(means.keys(), vec![ExperienceLevel::Entry]);
    assert_eq!(means.get(&ExperienceLevel::Entry), Some(40000.0));
}
