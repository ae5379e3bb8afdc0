//! Structured facts block for the narrative layer.
//!
//! Renders a [`ClassificationResult`] as deterministic French markdown.
//! The narrative model rephrases these facts but never recomputes them,
//! so every clinical figure the report needs is spelled out here. Any
//! nondeterminism in the final report is confined to phrasing.

use cognia_core::models::classification::{
    AidTotal, ClassificationResult, HomogeneityFlag, NormativeEntry, PairHomogeneity,
    RelativeStanding, ValidityVerdict,
};

/// Render the facts block handed to the narrative model.
pub fn facts_block(result: &ClassificationResult) -> String {
    let mut block = format!("## Profil WISC-V : {}\n\n", result.examinee);

    block.push_str(&format!(
        "Âge à la passation : {}\n\n",
        format_age(result.age.years, result.age.months)
    ));

    block.push_str("### Validité du QIT\n");
    block.push_str(&validity_line(
        &result.validity,
        result.thresholds.dispersion_invalid,
    ));
    block.push_str("\n\n");

    block.push_str(&format!(
        "### Homogénéité des paires (seuil {} points)\n",
        result.thresholds.pair_gap
    ));
    for pair in &result.pairs {
        block.push_str(&pair_line(pair));
        block.push('\n');
    }
    block.push('\n');

    block.push_str("### Lecture normative (moyenne 100, écart-type 15)\n");
    for entry in &result.normative {
        block.push_str(&normative_line(entry));
        block.push('\n');
    }
    block.push('\n');

    block.push_str("### Analyse intra-individuelle\n");
    match &result.ipsative {
        Some(profile) => {
            block.push_str(&format!(
                "Moyenne personnelle : {:.1}, écart-type : {:.1}\n",
                profile.mean, profile.stdev
            ));
            for entry in &profile.entries {
                let standing = match entry.standing {
                    RelativeStanding::Strength => "force relative",
                    RelativeStanding::Weakness => "faiblesse relative",
                    RelativeStanding::Average => "dans la moyenne personnelle",
                };
                block.push_str(&format!(
                    "- {} : {} (écart {:+.1}, {})\n",
                    entry.index.abbreviation(),
                    entry.points,
                    entry.delta,
                    standing,
                ));
            }
        }
        None => block.push_str("Aucun indice principal renseigné.\n"),
    }
    block.push('\n');

    block.push_str("### Sommes de contrôle des indices complémentaires\n");
    block.push_str(&aid_line("IAG", result.aids.iag));
    block.push_str(&aid_line("ICC", result.aids.icc));
    block.push_str(&aid_line("INV", result.aids.inv));

    block
}

fn format_age(years: u32, months: u32) -> String {
    let year_word = if years == 1 { "an" } else { "ans" };
    format!("{years} {year_word} {months} mois")
}

fn validity_line(verdict: &ValidityVerdict, dispersion_cutoff: u32) -> String {
    match verdict {
        ValidityVerdict::Incomplete { scored } => format!(
            "Profil incomplet : {scored} des 5 indices principaux renseignés, QIT non évaluable en l'état."
        ),
        ValidityVerdict::Invalid { dispersion } => format!(
            "QIT non interprétable : dispersion de {dispersion} points entre les indices principaux (seuil {dispersion_cutoff})."
        ),
        ValidityVerdict::Fragile { heterogeneous_pairs } => format!(
            "QIT fragile : {heterogeneous_pairs} paires de subtests hétérogènes sur 5."
        ),
        ValidityVerdict::Valid { dispersion } => format!(
            "QIT interprétable : profil homogène (dispersion de {dispersion} points, seuil {dispersion_cutoff})."
        ),
    }
}

fn pair_line(pair: &PairHomogeneity) -> String {
    let state = match pair.flag {
        None => "non évaluable (subtest non administré)".to_string(),
        Some(HomogeneityFlag::Homogeneous) => "homogène".to_string(),
        Some(HomogeneityFlag::Heterogeneous { gap }) => {
            format!("hétérogène (écart de {gap} points)")
        }
    };
    format!(
        "- {} ({} / {}) : {}",
        pair.index.abbreviation(),
        pair.first.name(),
        pair.second.name(),
        state,
    )
}

fn normative_line(entry: &NormativeEntry) -> String {
    let mut line = format!(
        "- {} : {} ({}, {:+.1} ET)",
        entry.index.abbreviation(),
        entry.points,
        entry.band.label(),
        entry.deviation_sd,
    );
    if let Some(percentile) = entry.percentile {
        line.push_str(&format!(", percentile {percentile}"));
    }
    if let Some(interval) = entry.confidence_interval {
        line.push_str(&format!(", IC 95 % [{}, {}]", interval.low, interval.high));
    }
    line
}

fn aid_line(abbreviation: &str, total: AidTotal) -> String {
    match total {
        AidTotal::Points(points) => format!(
            "- {abbreviation} : somme des notes standard {points} (à reporter dans la table de conversion)\n"
        ),
        AidTotal::Incomplete => {
            format!("- {abbreviation} : incomplet (subtest manquant)\n")
        }
    }
}
