//! Plain-text design report.
//!
//! Section and field order are part of the contract: downstream tooling
//! diffs these reports, so new lines go at the end of their section.

use std::io::{self, Write};

use crate::config::SystemConfig;
use crate::loads::ApplianceLoad;
use crate::sizing::SizingResults;

/// Writes the full design report to any writer.
///
/// `generated_at` is caller-supplied so output stays deterministic in tests.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_report<W: Write>(
    w: &mut W,
    generated_at: &str,
    loads: &[ApplianceLoad],
    params: &SystemConfig,
    results: &SizingResults,
) -> io::Result<()> {
    writeln!(w, "SOLAR SYSTEM DESIGN REPORT")?;
    writeln!(w, "Generated: {generated_at}")?;
    writeln!(w, "================================")?;
    writeln!(w)?;

    writeln!(w, "ENERGY REQUIREMENTS")?;
    writeln!(w, "-------------------")?;
    writeln!(
        w,
        "Total Daily Energy: {:.0} Wh",
        results.energy.total_wh
    )?;
    writeln!(w)?;

    writeln!(w, "APPLIANCES")?;
    writeln!(w, "-----------")?;
    for load in loads {
        writeln!(
            w,
            "{}: {}W × {} × {}h = {:.0} Wh",
            load.name,
            load.power_w,
            load.quantity,
            load.hours_per_day,
            load.daily_energy_wh()
        )?;
    }
    writeln!(w)?;

    writeln!(w, "SYSTEM PARAMETERS")?;
    writeln!(w, "-----------------")?;
    writeln!(w, "System Voltage: {}", params.voltage)?;
    writeln!(w, "Days of Autonomy: {}", params.autonomy_days)?;
    writeln!(
        w,
        "Depth of Discharge: {:.0}%",
        params.depth_of_discharge * 100.0
    )?;
    writeln!(w, "Battery Type: {}", params.battery_chemistry.label())?;
    writeln!(w, "Peak Sun Hours: {}", params.peak_sun_hours)?;
    writeln!(w, "Panel Type: {}", params.panel_technology)?;
    writeln!(w, "Panel Wattage: {}W", params.panel_wattage)?;
    writeln!(w)?;

    writeln!(w, "SYSTEM DESIGN")?;
    writeln!(w, "-------------")?;
    writeln!(
        w,
        "Battery Bank: {:.0} Ah at {}",
        results.battery.recommended_battery_ah, params.voltage
    )?;
    writeln!(w, "PV Array: {:.0} W", results.array.total_array_power_w)?;
    writeln!(w, "Array Configuration: {}", results.array.string_config())?;
    writeln!(w, "Inverter: {:.0} VA", results.inverter.rating_va)?;
    writeln!(
        w,
        "Charge Controller: {:.0} A",
        results.controller.current_a
    )?;
    writeln!(w)?;

    writeln!(w, "COST ESTIMATION")?;
    writeln!(w, "---------------")?;
    writeln!(w, "Panels: ${:.0}", results.cost.panel_cost_usd)?;
    writeln!(w, "Battery Bank: ${:.0}", results.cost.battery_cost_usd)?;
    writeln!(w, "Inverter: ${:.0}", results.cost.inverter_cost_usd)?;
    writeln!(
        w,
        "Charge Controller: ${:.0}",
        results.cost.controller_cost_usd
    )?;
    writeln!(
        w,
        "Mounting & Wiring: ${:.0}",
        results.cost.mounting_cost_usd
    )?;
    writeln!(
        w,
        "Total System Cost: ${:.0}",
        results.cost.total_cost_usd
    )?;
    writeln!(
        w,
        "Monthly Savings: ${:.2}",
        results.cost.monthly_savings_usd
    )?;
    writeln!(
        w,
        "Annual Savings: ${:.0}",
        results.cost.annual_savings_usd
    )?;
    writeln!(w, "Payback Period: {}", results.cost.payback)?;
    writeln!(
        w,
        "25-Year Savings: ${:.0}",
        results.cost.lifetime_savings_usd
    )?;
    Ok(())
}

/// Renders the report into a `String`.
pub fn render_report(
    generated_at: &str,
    loads: &[ApplianceLoad],
    params: &SystemConfig,
    results: &SizingResults,
) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_report(&mut buf, generated_at, loads, params, results)
        .expect("in-memory report rendering");
    String::from_utf8(buf).expect("report is valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesignConfig;
    use crate::sizing::recalculate;

    fn cabin_report() -> String {
        let cfg = DesignConfig::cabin();
        let registry = cfg.build_registry();
        let results = recalculate(registry.loads(), &cfg.system);
        render_report("2026-01-01 00:00", registry.loads(), &cfg.system, &results)
    }

    #[test]
    fn sections_appear_in_contract_order() {
        let report = cabin_report();
        let sections = [
            "SOLAR SYSTEM DESIGN REPORT",
            "ENERGY REQUIREMENTS",
            "APPLIANCES",
            "SYSTEM PARAMETERS",
            "SYSTEM DESIGN",
            "COST ESTIMATION",
        ];
        let mut last = 0;
        for section in sections {
            let pos = report.find(section).unwrap_or_else(|| {
                panic!("section \"{section}\" missing from report")
            });
            assert!(pos >= last, "section \"{section}\" out of order");
            last = pos;
        }
    }

    #[test]
    fn appliance_lines_show_the_energy_identity() {
        let report = cabin_report();
        assert!(report.contains("LED Lights: 10W × 4 × 6h = 240 Wh"));
        assert!(report.contains("Refrigerator: 150W × 1 × 8h = 1200 Wh"));
    }

    #[test]
    fn units_are_present_for_every_design_figure() {
        let report = cabin_report();
        assert!(report.contains(" Ah at 24V"));
        assert!(report.contains("PV Array: "));
        assert!(report.contains(" VA"));
        assert!(report.contains("Charge Controller: "));
        assert!(report.contains("Total System Cost: $"));
    }

    #[test]
    fn zero_load_report_shows_no_payback() {
        let cfg = DesignConfig::blank();
        let registry = cfg.build_registry();
        let results = recalculate(registry.loads(), &cfg.system);
        let report =
            render_report("2026-01-01 00:00", registry.loads(), &cfg.system, &results);
        assert!(report.contains("Payback Period: no payback"));
        assert!(!report.contains("inf"), "non-finite values must not leak");
        assert!(!report.contains("NaN"));
    }

    #[test]
    fn report_is_deterministic_for_fixed_timestamp() {
        assert_eq!(cabin_report(), cabin_report());
    }
}
