//! Literal source vectors and per-table constructors.
//!
//! Each constructor pairs equal-length column vectors into records by
//! positional index. The lengths are an authoring invariant; [`check_lengths`]
//! verifies them defensively and fails with a configuration error naming the
//! table before anything is written.

use super::records::{
    AreaBurnedRecord, CityPm25Record, EmissionsRecord, FireImpactRecord, Region, UtilityRecord,
    WildfireEstimateRecord,
};
use crate::error::{Result, WorkbookError};

/// Fixed PM2.5 emission factor: kilotonnes per million hectares burned.
pub const WILDFIRE_EMISSION_FACTOR_KT_PER_MHA: f64 = 713.0;

/// Verify that every column vector of a table has the same length.
///
/// # Errors
///
/// Returns `WorkbookError::Configuration` naming `table` when the lengths
/// disagree.
pub(crate) fn check_lengths(table: &str, lengths: &[usize]) -> Result<usize> {
    let Some(&first) = lengths.first() else {
        return Err(WorkbookError::Configuration(format!(
            "table '{table}' declares no column vectors"
        )));
    };

    if lengths.iter().any(|&len| len != first) {
        return Err(WorkbookError::Configuration(format!(
            "table '{table}' has mismatched column vector lengths: {lengths:?}"
        )));
    }

    Ok(first)
}

// ---------------------------------------------------------------------------
// national_emissions: anthropogenic PM2.5 by source, 1990-2023, kt
// ---------------------------------------------------------------------------

const EMISSION_YEARS: &[u16] = &[
    1990, 1991, 1992, 1993, 1994, 1995, 1996, 1997, 1998, 1999, 2000, 2001, 2002, 2003, 2004,
    2005, 2006, 2007, 2008, 2009, 2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019,
    2020, 2021, 2022, 2023,
];

const ROADS_KT: &[f64] = &[
    312.0, 315.0, 319.0, 324.0, 330.0, 336.0, 341.0, 347.0, 352.0, 358.0, 363.0, 369.0, 374.0,
    380.0, 385.0, 391.0, 396.0, 401.0, 405.0, 410.0, 414.0, 418.0, 423.0, 427.0, 431.0, 435.0,
    438.0, 442.0, 445.0, 449.0, 451.0, 453.0, 455.0, 457.0,
];

const CROPS_KT: &[f64] = &[
    372.0, 368.0, 371.0, 366.0, 369.0, 364.0, 367.0, 362.0, 365.0, 360.0, 363.0, 358.0, 361.0,
    356.0, 359.0, 354.0, 357.0, 352.0, 355.0, 350.0, 353.0, 348.0, 351.0, 346.0, 349.0, 344.0,
    347.0, 342.0, 345.0, 340.0, 343.0, 344.0, 345.0, 346.0,
];

const CONSTR_KT: &[f64] = &[
    258.0, 255.0, 259.0, 263.0, 268.0, 272.0, 277.0, 282.0, 288.0, 293.0, 299.0, 304.0, 310.0,
    315.0, 321.0, 326.0, 332.0, 337.0, 343.0, 348.0, 353.0, 358.0, 363.0, 368.0, 373.0, 378.0,
    382.0, 387.0, 391.0, 395.0, 398.0, 401.0, 404.0, 407.0,
];

const OTHER_KT: &[f64] = &[
    186.0, 183.0, 180.0, 178.0, 175.0, 172.0, 169.0, 167.0, 164.0, 161.0, 158.0, 156.0, 153.0,
    150.0, 148.0, 145.0, 142.0, 140.0, 137.0, 134.0, 132.0, 129.0, 127.0, 124.0, 122.0, 120.0,
    118.0, 116.0, 114.0, 112.0, 111.0, 110.0, 110.0, 109.0,
];

const FIREWOOD_KT: &[f64] = &[
    128.0, 126.0, 124.0, 121.0, 119.0, 116.0, 113.0, 110.0, 107.0, 104.0, 101.0, 98.0, 95.0,
    92.0, 89.0, 86.0, 84.0, 81.0, 79.0, 76.0, 74.0, 71.0, 69.0, 67.0, 64.0, 62.0, 60.0, 58.0,
    56.0, 55.0, 53.0, 52.0, 52.0, 51.0,
];

pub(super) fn national_emissions() -> Result<Vec<EmissionsRecord>> {
    check_lengths(
        "national_emissions",
        &[
            EMISSION_YEARS.len(),
            ROADS_KT.len(),
            CROPS_KT.len(),
            CONSTR_KT.len(),
            OTHER_KT.len(),
            FIREWOOD_KT.len(),
        ],
    )?;

    Ok(EMISSION_YEARS
        .iter()
        .enumerate()
        .map(|(i, &year)| {
            let (roads, crops, constr, other, firewood) = (
                ROADS_KT[i],
                CROPS_KT[i],
                CONSTR_KT[i],
                OTHER_KT[i],
                FIREWOOD_KT[i],
            );
            EmissionsRecord {
                year,
                roads,
                crops,
                constr,
                other,
                firewood,
                total: roads + crops + constr + other + firewood,
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// electric_utilities: PM2.5 from electric utilities, selected years, kt
// ---------------------------------------------------------------------------

const UTILITY_YEARS: &[u16] = &[
    1990, 1995, 2000, 2002, 2004, 2006, 2008, 2010, 2012, 2014, 2016, 2018, 2020, 2022, 2023,
];

const UTILITY_PM25_KT: &[f64] = &[
    38.0, 36.5, 34.0, 32.2, 30.1, 27.8, 24.6, 21.3, 17.9, 14.2, 10.8, 7.4, 4.6, 2.9, 2.4,
];

pub(super) fn electric_utilities() -> Result<Vec<UtilityRecord>> {
    check_lengths(
        "electric_utilities",
        &[UTILITY_YEARS.len(), UTILITY_PM25_KT.len()],
    )?;

    Ok(UTILITY_YEARS
        .iter()
        .zip(UTILITY_PM25_KT)
        .map(|(&year, &pm25)| UtilityRecord { year, pm25 })
        .collect())
}

// ---------------------------------------------------------------------------
// wildfire_estimates: wildfire vs anthropogenic PM2.5, selected years, kt
// ---------------------------------------------------------------------------

const WILDFIRE_YEARS: &[u16] = &[
    1990, 1995, 1998, 2000, 2002, 2004, 2006, 2008, 2010, 2012, 2014, 2015, 2017, 2018, 2019,
    2020, 2021, 2022, 2023,
];

const WILDFIRE_AREA_MHA: &[f64] = &[
    1.1, 6.6, 4.7, 0.6, 2.8, 3.2, 2.1, 1.7, 3.2, 2.0, 4.6, 3.9, 3.4, 2.3, 1.8, 0.2, 4.3, 1.5,
    15.0,
];

const ANTHROPOGENIC_PM25_KT: &[f64] = &[
    1256.0, 1260.0, 1276.0, 1284.0, 1293.0, 1302.0, 1311.0, 1319.0, 1326.0, 1333.0, 1339.0,
    1339.0, 1345.0, 1351.0, 1351.0, 1356.0, 1360.0, 1366.0, 1370.0,
];

pub(super) fn wildfire_estimates() -> Result<Vec<WildfireEstimateRecord>> {
    check_lengths(
        "wildfire_estimates",
        &[
            WILDFIRE_YEARS.len(),
            WILDFIRE_AREA_MHA.len(),
            ANTHROPOGENIC_PM25_KT.len(),
        ],
    )?;

    Ok(WILDFIRE_YEARS
        .iter()
        .enumerate()
        .map(|(i, &year)| {
            let area_burned_mha = WILDFIRE_AREA_MHA[i];
            WildfireEstimateRecord {
                year,
                area_burned_mha,
                wildfire_pm25: (area_burned_mha * WILDFIRE_EMISSION_FACTOR_KT_PER_MHA).round(),
                anthropogenic_pm25: ANTHROPOGENIC_PM25_KT[i],
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// area_burned: national area burned by wildfires, 1990-2023, Mha
// ---------------------------------------------------------------------------

const AREA_YEARS: &[u16] = EMISSION_YEARS;

const AREA_BURNED_MHA: &[f64] = &[
    1.1, 1.6, 0.9, 1.8, 6.2, 6.6, 1.9, 0.6, 4.7, 1.7, 0.6, 0.6, 2.8, 1.6, 3.2, 1.7, 2.1, 1.9,
    1.7, 0.8, 3.2, 2.5, 2.0, 4.2, 4.6, 3.9, 1.4, 3.4, 2.3, 1.8, 0.2, 4.3, 1.5, 15.0,
];

pub(super) fn area_burned() -> Result<Vec<AreaBurnedRecord>> {
    check_lengths("area_burned", &[AREA_YEARS.len(), AREA_BURNED_MHA.len()])?;

    Ok(AREA_YEARS
        .iter()
        .zip(AREA_BURNED_MHA)
        .map(|(&year, &burned_mha)| AreaBurnedRecord { year, burned_mha })
        .collect())
}

// ---------------------------------------------------------------------------
// city_pm25: annual average PM2.5 for eight cities, 2014-2023, µg/m³
// ---------------------------------------------------------------------------

const CITY_YEARS: &[u16] = &[2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023];

/// One block per city: ten annual averages aligned with [`CITY_YEARS`].
const CITY_SERIES: &[(&str, Region, &[f64])] = &[
    (
        "Vancouver",
        Region::Western,
        &[5.9, 6.2, 5.8, 8.4, 9.1, 5.6, 6.0, 8.8, 6.1, 7.2],
    ),
    (
        "Calgary",
        Region::Western,
        &[7.0, 7.4, 6.8, 9.6, 10.3, 6.5, 6.9, 9.9, 7.1, 8.4],
    ),
    (
        "Edmonton",
        Region::Western,
        &[7.8, 8.1, 7.5, 10.2, 11.0, 7.2, 7.6, 10.6, 7.9, 9.3],
    ),
    (
        "Toronto",
        Region::Central,
        &[7.9, 7.6, 7.2, 7.0, 7.4, 6.8, 6.5, 7.3, 6.9, 9.8],
    ),
    (
        "Montreal",
        Region::Central,
        &[8.3, 8.0, 7.6, 7.4, 7.7, 7.1, 6.8, 7.6, 7.2, 10.4],
    ),
    (
        "Ottawa",
        Region::Central,
        &[7.1, 6.8, 6.4, 6.2, 6.6, 6.0, 5.7, 6.5, 6.1, 9.6],
    ),
    (
        "Halifax",
        Region::Atlantic,
        &[5.4, 5.2, 4.9, 4.8, 5.0, 4.6, 4.4, 4.9, 4.7, 6.8],
    ),
    (
        "St. John's",
        Region::Atlantic,
        &[4.8, 4.6, 4.4, 4.3, 4.5, 4.1, 4.0, 4.4, 4.2, 5.7],
    ),
];

pub(super) fn city_pm25() -> Result<Vec<CityPm25Record>> {
    let mut rows = Vec::with_capacity(CITY_SERIES.len() * CITY_YEARS.len());

    for &(city, region, series) in CITY_SERIES {
        check_lengths(
            &format!("city_pm25 ({city})"),
            &[CITY_YEARS.len(), series.len()],
        )?;

        for (&year, &pm25) in CITY_YEARS.iter().zip(series) {
            rows.push(CityPm25Record {
                year,
                city,
                region,
                pm25,
            });
        }
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// fire_impact: national average PM2.5 vs area burned, 2009-2023
// ---------------------------------------------------------------------------

const IMPACT_YEARS: &[u16] = &[
    2009, 2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023,
];

const IMPACT_NAT_AVG_PM25: &[f64] = &[
    6.0, 7.1, 6.8, 6.4, 7.4, 7.6, 7.3, 6.1, 7.9, 7.0, 6.6, 5.5, 8.1, 6.3, 10.9,
];

const IMPACT_AREA_MHA: &[f64] = &[
    0.8, 3.2, 2.5, 2.0, 4.2, 4.6, 3.9, 1.4, 3.4, 2.3, 1.8, 0.2, 4.3, 1.5, 15.0,
];

pub(super) fn fire_impact() -> Result<Vec<FireImpactRecord>> {
    check_lengths(
        "fire_impact",
        &[
            IMPACT_YEARS.len(),
            IMPACT_NAT_AVG_PM25.len(),
            IMPACT_AREA_MHA.len(),
        ],
    )?;

    Ok(IMPACT_YEARS
        .iter()
        .enumerate()
        .map(|(i, &year)| FireImpactRecord {
            year,
            nat_avg_pm25: IMPACT_NAT_AVG_PM25[i],
            area_burned_mha: IMPACT_AREA_MHA[i],
        })
        .collect())
}
