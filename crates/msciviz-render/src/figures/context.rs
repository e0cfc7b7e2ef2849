//! 연도별 시장 배경 설명.
//!
//! returns-one 차트에서 연도 블록에 호버하면 표시되는 한 줄 요약입니다.

/// 해당 연도의 시장 배경 한 줄 요약을 반환합니다.
///
/// 기록 범위 (1970-2024) 밖의 연도는 `None`입니다.
pub fn historical_context(year: i32) -> Option<&'static str> {
    let text = match year {
        1970 => "Entering the year in recession after the late-'60s slowdown, leading to a weak stock market",
        1971 => "Aggressive monetary easing under President Nixon fuels a strong global rebound",
        1972 => "Economic boom peaks - low unemployment and surging earnings drive exuberant gains",
        1973 => "Bretton Woods collapse and OPEC embargo trigger stagflation fears and market downturn",
        1974 => "Deep stagflation; double-digit inflation and steep equity losses dominate the year",
        1975 => "Post-crisis rebound as the 1973-75 recession ends and economies begin recovering",
        1976 => "Continued recovery despite persistent inflation; expansion resumes amid price pressures",
        1977 => "Growth slows under renewed stagflation concerns, keeping equity gains modest",
        1978 => "Brief market resurgence as global economies stabilize ahead of the second oil shock",
        1979 => "Second oil crisis (Iran) drives energy prices higher, stoking worldwide inflation",
        1980 => "Volcker's tight policy battles inflation; stocks hold as expectations peak",
        1981 => "Deepening 'Volcker recession' and record rates weigh on global markets",
        1982 => "Inflation breaks, recession ends, and a new bull market dawns as pressures ease",
        1983 => "Robust recovery - falling inflation and global growth boost investor confidence",
        1984 => "Expansion persists, but rising rates and deficit worries temper enthusiasm",
        1985 => "Disinflation and weaker dollar ignite a mid-'80s bull surge in global equities",
        1986 => "Oil price collapse plus Japan's asset boom fuel another year of outsized gains",
        1987 => "'Black Monday' crash jolts markets, though earlier strength keeps year positive",
        1988 => "Markets rebound from 1987 shock as global growth resumes and fears subside",
        1989 => "Cold War ends, Berlin Wall falls, and Japan's bubble lifts equities to new highs",
        1990 => "Iraq-Kuwait conflict and oil spike spark global sell-off and recession fears",
        1991 => "Gulf War victory and recession end trigger relief rally in global equities",
        1992 => "Jobless U.S. recovery and Europe's ERM crisis keep markets subdued",
        1993 => "Low rates and reviving global economy push stocks higher again",
        1994 => "Aggressive Fed hikes cause bond-market 'massacre' and cap equity advances",
        1995 => "Soft-landing economy and tech profit boom power a strong rally",
        1996 => "Greenspan warns of 'irrational exuberance' amid accelerating market ascent",
        1997 => "Asian Financial Crisis hits EM stocks; Western markets stay largely resilient",
        1998 => "Russia default and LTCM near-collapse roil markets until Fed interventions",
        1999 => "Dot-com frenzy drives technology stocks and indices to record peaks",
        2000 => "Dot-com bubble bursts, marking the start of a global downturn",
        2001 => "Global recession and 9/11 attacks cause sharp plunge and disruption",
        2002 => "Accounting scandals and sluggish recovery prolong the bear market",
        2003 => "Swift Iraq War end and ultra-low rates spark a powerful rebound",
        2004 => "Steady growth in low-rate environment sustains rally amid rising commodities",
        2005 => "Record oil prices and continued Fed hikes limit market gains",
        2006 => "Global boom led by emerging giants drives equities higher",
        2007 => "Credit-fueled optimism peaks; housing strains surface late in year",
        2008 => "Global Financial Crisis - bank failures trigger worldwide market collapse",
        2009 => "Massive fiscal and monetary stimulus spurs sharp rebound from crisis lows",
        2010 => "Recovery continues, but Europe's debt crisis injects volatility",
        2011 => "Eurozone turmoil and U.S. credit downgrade ignite market swings",
        2012 => "ECB 'whatever it takes' pledge calms euro crisis and restores confidence",
        2013 => "QE and synchronized growth power an exceptional year for equities",
        2014 => "Modest gains as Fed ends QE and oil prices collapse late in year",
        2015 => "China growth scare and first Fed hike in decade leave equities flat",
        2016 => "Brexit and U.S. election shocks raise volatility, but markets grind higher",
        2017 => "Global expansion with low inflation and volatility produces strong gains",
        2018 => "U.S.-China trade war and Fed tightening drive broad sell-off",
        2019 => "Central banks pivot to easing, trade tensions cool, fueling robust rally",
        2020 => "COVID-19 crash met by unprecedented stimulus; markets rebound rapidly",
        2021 => "Vaccine-driven reopening and record profits lift markets to new highs",
        2022 => "Inflation surge, aggressive hikes, and Ukraine war spark steep downturn",
        2023 => "Easing inflation and AI-led tech boom drive strong rebound despite high rates",
        2024 => "Global easing cycle begins; AI mega-caps propel gains as rate cuts offset election risks",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_full_history() {
        for year in 1970..=2024 {
            assert!(historical_context(year).is_some(), "missing year {year}");
        }
    }

    #[test]
    fn test_outside_history_is_none() {
        assert!(historical_context(1969).is_none());
        assert!(historical_context(2025).is_none());
    }
}
