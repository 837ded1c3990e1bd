use salary_charts::layout::{LayoutConfig, plan};
use salary_charts::models::{Dimension, Record};
use salary_charts::viz::palette::{UNKNOWN, experience_color};
use salary_charts::viz::pcp::{LINE_OPACITY, PcpScales, dimension_domain, pcp_lines};
use salary_charts::viz::scale::Scale;
use salary_charts::ExperienceLevel;

fn rec(year: Option<i32>, exp: &str, salary: Option<f64>, remote: Option<f64>) -> Record {
    Record {
        work_year: year.map(f64::from),
        experience_level: exp.into(),
        company_size: "M".into(),
        salary_in_usd: salary,
        remote_ratio: remote,
    }
}

#[test]
fn every_record_gets_three_points_when_complete() {
    let rows = vec![
        rec(Some(2022), "EN", Some(50000.0), Some(0.0)),
        rec(Some(2022), "SE", Some(150000.0), Some(100.0)),
        rec(Some(2023), "EN", Some(60000.0), Some(50.0)),
    ];
    let layout = plan(1400.0, 900.0, &LayoutConfig::default());
    let scales = PcpScales::new(&rows, &layout.pcp);
    let lines = pcp_lines(&rows, &scales, &layout.pcp);
    assert_eq!(lines.len(), 3);
    for l in &lines {
        assert_eq!(l.points.len(), 3);
        // x positions are the three axis positions, left to right
        assert!(l.points[0].0 < l.points[1].0 && l.points[1].0 < l.points[2].0);
    }
    // remote ratio 0 sits on the bottom edge, 100 on the top edge
    assert!((lines[0].points[2].1 - layout.pcp.bottom()).abs() < 1e-9);
    assert!((lines[1].points[2].1 - layout.pcp.y).abs() < 1e-9);
}

#[test]
fn salary_domain_is_padded_then_rounded() {
    let rows = vec![
        rec(Some(2022), "EN", Some(50000.0), Some(0.0)),
        rec(Some(2022), "SE", Some(150000.0), Some(100.0)),
        rec(Some(2023), "EN", Some(60000.0), Some(50.0)),
    ];
    // [50k, 150k] padded by 5k each side, then niced to 10k steps
    assert_eq!(
        dimension_domain(&rows, Dimension::SalaryInUsd),
        (40000.0, 160000.0)
    );
    assert_eq!(dimension_domain(&rows, Dimension::WorkYear), (2022.0, 2023.0));
    assert_eq!(dimension_domain(&rows, Dimension::RemoteRatio), (0.0, 100.0));
}

#[test]
fn salary_lower_bound_never_goes_negative() {
    let rows = vec![
        rec(Some(2022), "EN", Some(1000.0), Some(0.0)),
        rec(Some(2022), "EN", Some(100000.0), Some(0.0)),
    ];
    let (lo, hi) = dimension_domain(&rows, Dimension::SalaryInUsd);
    assert_eq!(lo, 0.0);
    assert!(hi >= 104950.0);
}

#[test]
fn single_year_widens_by_half_a_year() {
    let rows = vec![
        rec(Some(2021), "MI", Some(10.0), Some(0.0)),
        rec(Some(2021), "SE", Some(20.0), Some(50.0)),
    ];
    assert_eq!(dimension_domain(&rows, Dimension::WorkYear), (2020.5, 2021.5));
}

#[test]
fn boundary_values_are_kept_and_out_of_domain_values_dropped_per_axis() {
    let rows = vec![
        rec(Some(2020), "EN", Some(80000.0), Some(100.0)),
        rec(Some(2021), "MI", Some(90000.0), Some(150.0)),
        rec(Some(2022), "SE", Some(70000.0), Some(-5.0)),
    ];
    let layout = plan(1400.0, 900.0, &LayoutConfig::default());
    let scales = PcpScales::new(&rows, &layout.pcp);

    // exactly on the fixed remote-ratio bound
    assert_eq!(scales.project(&rows[0]).len(), 3);

    // outside [0, 100]: only that axis is dropped, year and salary stay connected
    let above = scales.project(&rows[1]);
    let below = scales.project(&rows[2]);
    assert_eq!(above.len(), 2);
    assert_eq!(below.len(), 2);
    let x_year = scales.x.apply(&Dimension::WorkYear).unwrap();
    let x_salary = scales.x.apply(&Dimension::SalaryInUsd).unwrap();
    assert_eq!(above[0].0, x_year);
    assert_eq!(above[1].0, x_salary);
}

#[test]
fn missing_middle_value_joins_outer_axes_directly() {
    let rows = vec![
        rec(Some(2020), "EN", Some(50000.0), Some(0.0)),
        rec(Some(2021), "EX", None, Some(50.0)),
        rec(Some(2022), "SE", Some(70000.0), None),
    ];
    let layout = plan(1400.0, 900.0, &LayoutConfig::default());
    let scales = PcpScales::new(&rows, &layout.pcp);
    let lines = pcp_lines(&rows, &scales, &layout.pcp);

    let gap = &lines[1].points;
    assert_eq!(gap.len(), 2);
    let x_year = layout.pcp.x + scales.x.apply(&Dimension::WorkYear).unwrap();
    let x_remote = layout.pcp.x + scales.x.apply(&Dimension::RemoteRatio).unwrap();
    assert_eq!(gap[0].0, x_year);
    assert_eq!(gap[1].0, x_remote);

    assert_eq!(lines[2].points.len(), 2);
}

#[test]
fn lines_are_colored_by_experience_and_translucent() {
    let rows = vec![
        rec(Some(2020), "SE", Some(1.0), Some(0.0)),
        rec(Some(2020), "XX", Some(2.0), Some(0.0)),
        rec(None, "EN", None, None),
    ];
    let layout = plan(1000.0, 800.0, &LayoutConfig::default());
    let scales = PcpScales::new(&rows, &layout.pcp);
    let lines = pcp_lines(&rows, &scales, &layout.pcp);
    assert_eq!(lines[0].stroke.color, experience_color(ExperienceLevel::Senior));
    assert_eq!(lines[1].stroke.color, UNKNOWN);
    assert_eq!(lines[0].stroke.opacity, LINE_OPACITY);
    // nothing to plot at all
    assert!(lines[2].points.is_empty());
}

#[test]
fn infinite_salary_does_not_stretch_the_axis() {
    let rows = vec![
        rec(Some(2021), "EN", Some(f64::INFINITY), Some(50.0)),
        rec(Some(2022), "SE", Some(100000.0), Some(0.0)),
        rec(Some(2022), "MI", Some(60000.0), Some(0.0)),
    ];
    let (lo, hi) = dimension_domain(&rows, Dimension::SalaryInUsd);
    assert!(lo.is_finite() && hi.is_finite());
    assert!(hi >= 100000.0);

    let layout = plan(1400.0, 900.0, &LayoutConfig::default());
    let scales = PcpScales::new(&rows, &layout.pcp);
    let lines = pcp_lines(&rows, &scales, &layout.pcp);
    // the infinite cell is a gap: year joins remote ratio directly
    assert_eq!(lines[0].points.len(), 2);
    for l in &lines {
        assert!(l.points.iter().all(|p| p.0.is_finite() && p.1.is_finite()));
    }
    // $100,000 sits above $60,000, not pinned to the bottom edge
    assert!(lines[1].points[1].1 < lines[2].points[1].1);
    assert!(lines[1].points[1].1 < layout.pcp.bottom());
}
