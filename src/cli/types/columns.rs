//! Sortable column keys for the tabular pages.
//!
//! Each enum names the columns of one table and is accepted by that page's
//! `--sort` option. The mapping from key to record field lives with the page.

use serde::Serialize;

/// Game log columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameLogColumn {
    Date,
    Matchup,
    #[value(name = "wl", alias = "w/l")]
    Wl,
    Min,
    Pts,
    Reb,
    Ast,
    #[value(alias = "fg%")]
    FgPct,
    #[value(alias = "3p%")]
    Fg3Pct,
    Stl,
    Blk,
    Tov,
    #[value(alias = "+/-")]
    PlusMinus,
}

/// "All splits" table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SplitColumn {
    Split,
    Gp,
    Pts,
    Reb,
    Ast,
    #[value(alias = "fg%")]
    FgPct,
    #[value(alias = "3p%")]
    Fg3Pct,
    #[value(alias = "+/-")]
    PlusMinus,
}

/// Season-by-season career table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CareerColumn {
    Season,
    Gp,
    Min,
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    #[value(alias = "fg%")]
    FgPct,
    #[value(alias = "3p%")]
    Fg3Pct,
    #[value(alias = "ft%")]
    FtPct,
    #[value(alias = "+/-")]
    PlusMinus,
}

/// Advanced stats table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AdvancedColumn {
    Season,
    OffRtg,
    DefRtg,
    NetRtg,
    #[value(alias = "ts%")]
    TsPct,
    #[value(alias = "efg%")]
    EfgPct,
    #[value(alias = "usg%")]
    UsgPct,
    Pace,
    Pie,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_kebab_case_names() {
        assert_eq!(
            GameLogColumn::from_str("plus-minus", true).unwrap(),
            GameLogColumn::PlusMinus
        );
        assert_eq!(
            GameLogColumn::from_str("fg3-pct", true).unwrap(),
            GameLogColumn::Fg3Pct
        );
        assert_eq!(
            AdvancedColumn::from_str("net-rtg", true).unwrap(),
            AdvancedColumn::NetRtg
        );
    }

    #[test]
    fn test_symbol_aliases() {
        assert_eq!(GameLogColumn::from_str("fg%", true).unwrap(), GameLogColumn::FgPct);
        assert_eq!(SplitColumn::from_str("+/-", true).unwrap(), SplitColumn::PlusMinus);
        assert_eq!(CareerColumn::from_str("FT%", true).unwrap(), CareerColumn::FtPct);
        assert!(CareerColumn::from_str("rating", true).is_err());
    }
}
