//! Daily schedule computation.
//!
//! Solves each event's UTC hour from solar geometry, then resolves it
//! onto the local wall clock. High-latitude dates where the twilight
//! depression is never reached fall back per [`HighLatitudeRule`];
//! missing sunrise/sunset (polar day/night) is an error, since no
//! wall-clock schedule exists at all.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};

use miqat_core::GeoCoordinate;
use miqat_solar::{
    SUNRISE_SET_ALTITUDE_DEG, SolarEventResult, event_utc_hours, hour_angle_deg,
    julian_day_0h, shadow_altitude_deg, sun_position, transit_utc_hours, HourAngle,
};

use crate::error::TimesError;
use crate::method::{AsrJuristic, CalculationMethod, HighLatitudeRule, IshaRule};
use crate::types::{Prayer, PrayerEvent, PrayerSchedule};

/// Mean Earth radius in meters, for the geometric horizon dip.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Refinement passes for the Asr solve.
const ASR_PASSES: usize = 3;

/// Compute the six-event schedule for a date, location, and UTC offset.
pub fn compute_schedule(
    coord: &GeoCoordinate,
    date: NaiveDate,
    utc_offset: FixedOffset,
    method: CalculationMethod,
    asr: AsrJuristic,
) -> Result<PrayerSchedule, TimesError> {
    let horizon = horizon_altitude_deg(coord.altitude_m);

    let sunrise = rise_set_hour(date, coord, horizon, true)?;
    let maghrib = rise_set_hour(date, coord, horizon, false)?;
    let dhuhr = transit_utc_hours(date, coord.longitude_deg);
    let asr_h = asr_hour(date, coord, dhuhr, asr)?;

    let fajr_angle = method.fajr_angle_deg();
    let fajr = match event_utc_hours(date, coord.latitude_deg, coord.longitude_deg, -fajr_angle, true)
    {
        SolarEventResult::At(h) => h,
        // Twilight never gets dark enough; fall back into the previous
        // night (the one that ends at this morning's sunrise).
        SolarEventResult::AlwaysAbove | SolarEventResult::NeverReaches => {
            let prev_date = date.pred_opt().ok_or(TimesError::Degenerate("date range"))?;
            let prev_maghrib = rise_set_hour(prev_date, coord, horizon, false)? - 24.0;
            night_fallback(prev_maghrib, sunrise, HighLatitudeRule::MiddleOfNight)
        }
    };

    let isha = match method.isha_rule() {
        IshaRule::MinutesAfterMaghrib(min) => maghrib + min as f64 / 60.0,
        IshaRule::Angle(angle) => {
            match event_utc_hours(date, coord.latitude_deg, coord.longitude_deg, -angle, false) {
                SolarEventResult::At(h) => h,
                SolarEventResult::AlwaysAbove | SolarEventResult::NeverReaches => {
                    let next_date =
                        date.succ_opt().ok_or(TimesError::Degenerate("date range"))?;
                    let next_sunrise = rise_set_hour(next_date, coord, horizon, true)? + 24.0;
                    night_fallback(maghrib, next_sunrise, HighLatitudeRule::MiddleOfNight)
                }
            }
        }
    };

    let offset_hours = f64::from(utc_offset.local_minus_utc()) / 3600.0;
    let to_local = |utc_h: f64| local_wall_clock(utc_h, offset_hours);

    Ok(PrayerSchedule {
        date,
        events: vec![
            PrayerEvent::new(Prayer::Fajr, to_local(fajr)),
            PrayerEvent::new(Prayer::Sunrise, to_local(sunrise)),
            PrayerEvent::new(Prayer::Dhuhr, to_local(dhuhr)),
            PrayerEvent::new(Prayer::Asr, to_local(asr_h)),
            PrayerEvent::new(Prayer::Maghrib, to_local(maghrib)),
            PrayerEvent::new(Prayer::Isha, to_local(isha)),
        ],
    })
}

/// Horizon altitude for sunrise/sunset, including the geometric dip
/// for an elevated observer: `dip = sqrt(2h/R)` radians.
fn horizon_altitude_deg(altitude_m: f64) -> f64 {
    if altitude_m > 0.0 {
        SUNRISE_SET_ALTITUDE_DEG - (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
    } else {
        SUNRISE_SET_ALTITUDE_DEG
    }
}

fn rise_set_hour(
    date: NaiveDate,
    coord: &GeoCoordinate,
    altitude_deg: f64,
    rising: bool,
) -> Result<f64, TimesError> {
    match event_utc_hours(
        date,
        coord.latitude_deg,
        coord.longitude_deg,
        altitude_deg,
        rising,
    ) {
        SolarEventResult::At(h) => Ok(h),
        SolarEventResult::NeverReaches => Err(TimesError::PolarNight),
        SolarEventResult::AlwaysAbove => Err(TimesError::PolarDay),
    }
}

/// Iterative Asr solve: the shadow altitude depends on the declination
/// at the event, so re-evaluate at each estimate.
fn asr_hour(
    date: NaiveDate,
    coord: &GeoCoordinate,
    dhuhr: f64,
    asr: AsrJuristic,
) -> Result<f64, TimesError> {
    let jd_0h = julian_day_0h(date);
    let mut utc_h = dhuhr + 3.0;
    for _ in 0..ASR_PASSES {
        let sun = sun_position(jd_0h + utc_h / 24.0);
        let alt = shadow_altitude_deg(coord.latitude_deg, sun.declination_rad, asr.shadow_factor());
        let ha = match hour_angle_deg(coord.latitude_deg, sun.declination_rad, alt) {
            HourAngle::Deg(d) => d,
            _ => return Err(TimesError::Degenerate("asr altitude unreachable")),
        };
        let transit = 12.0 - coord.longitude_deg / 15.0 - sun.equation_of_time_min / 60.0;
        utc_h = transit + ha / 15.0;
    }
    Ok(utc_h)
}

/// Place a missing twilight event inside the night `[dusk, dawn]`
/// (UTC hours, dawn > dusk).
fn night_fallback(dusk: f64, dawn: f64, rule: HighLatitudeRule) -> f64 {
    match rule {
        HighLatitudeRule::MiddleOfNight => (dusk + dawn) / 2.0,
    }
}

/// UTC decimal hour to local wall-clock time, wrapped onto [0, 24h) and
/// rounded to the nearest second.
fn local_wall_clock(utc_h: f64, offset_hours: f64) -> NaiveTime {
    let local = (utc_h + offset_hours).rem_euclid(24.0);
    let secs = (local * 3600.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Duration of the night around a schedule, for display: Maghrib to
/// the next day's Fajr, assuming the next day's Fajr matches today's.
pub fn approximate_night_length(schedule: &PrayerSchedule) -> Option<Duration> {
    let maghrib = schedule.event(Prayer::Maghrib)?.time;
    let fajr = schedule.event(Prayer::Fajr)?.time;
    let night = Duration::hours(24) - (maghrib - fajr);
    Some(night)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mecca() -> GeoCoordinate {
        GeoCoordinate::new(21.4225, 39.8262)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tz(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn hm(t: NaiveTime) -> String {
        t.format("%H:%M").to_string()
    }

    #[test]
    fn mecca_umm_al_qura_new_year() {
        // Pinned by the reference computation; published Umm al-Qura
        // times for 2024-01-01 agree within two minutes.
        let s = compute_schedule(
            &mecca(),
            date(2024, 1, 1),
            tz(3),
            CalculationMethod::UmmAlQura,
            AsrJuristic::Standard,
        )
        .unwrap();
        assert!(s.is_ascending(), "events out of order: {s:?}");
        assert_eq!(hm(s.event(Prayer::Fajr).unwrap().time), "05:36");
        assert_eq!(hm(s.event(Prayer::Sunrise).unwrap().time), "06:58");
        assert_eq!(hm(s.event(Prayer::Dhuhr).unwrap().time), "12:23");
        assert_eq!(hm(s.event(Prayer::Asr).unwrap().time), "15:28");
        assert_eq!(hm(s.event(Prayer::Maghrib).unwrap().time), "17:49");
        assert_eq!(hm(s.event(Prayer::Isha).unwrap().time), "19:19");
    }

    #[test]
    fn polar_night_is_an_error() {
        let tromso = GeoCoordinate::new(69.65, 18.96);
        let r = compute_schedule(
            &tromso,
            date(2024, 12, 21),
            tz(1),
            CalculationMethod::MuslimWorldLeague,
            AsrJuristic::Standard,
        );
        assert_eq!(r, Err(TimesError::PolarNight));
    }

    #[test]
    fn polar_day_is_an_error() {
        let tromso = GeoCoordinate::new(69.65, 18.96);
        let r = compute_schedule(
            &tromso,
            date(2024, 6, 21),
            tz(2),
            CalculationMethod::MuslimWorldLeague,
            AsrJuristic::Standard,
        );
        assert_eq!(r, Err(TimesError::PolarDay));
    }

    #[test]
    fn london_solstice_uses_night_fallback() {
        // 18/17-degree twilight never occurs; Fajr and Isha land
        // strictly inside the night.
        let london = GeoCoordinate::new(51.5074, -0.1278);
        let s = compute_schedule(
            &london,
            date(2024, 6, 21),
            tz(1),
            CalculationMethod::MuslimWorldLeague,
            AsrJuristic::Standard,
        )
        .unwrap();
        let fajr = s.event(Prayer::Fajr).unwrap().time;
        let sunrise = s.event(Prayer::Sunrise).unwrap().time;
        let maghrib = s.event(Prayer::Maghrib).unwrap().time;
        assert!(fajr < sunrise, "fajr {fajr} before sunrise {sunrise}");
        // Midnight-ish: after 00:00, before ~02:30 local.
        assert!(
            fajr > NaiveTime::from_hms_opt(0, 0, 0).unwrap()
                && fajr < NaiveTime::from_hms_opt(2, 30, 0).unwrap(),
            "fajr fallback = {fajr}"
        );
        let isha = s.event(Prayer::Isha).unwrap().time;
        // Isha wraps past local midnight; it must not sit in daytime.
        assert!(
            isha < NaiveTime::from_hms_opt(2, 30, 0).unwrap() || isha > maghrib,
            "isha fallback = {isha}"
        );
    }

    #[test]
    fn hanafi_asr_is_later() {
        let karachi = GeoCoordinate::new(24.8607, 67.0011);
        let d = date(2024, 9, 15);
        let std = compute_schedule(
            &karachi,
            d,
            tz(5),
            CalculationMethod::Karachi,
            AsrJuristic::Standard,
        )
        .unwrap();
        let hanafi = compute_schedule(
            &karachi,
            d,
            tz(5),
            CalculationMethod::Karachi,
            AsrJuristic::Hanafi,
        )
        .unwrap();
        let t_std = std.event(Prayer::Asr).unwrap().time;
        let t_hanafi = hanafi.event(Prayer::Asr).unwrap().time;
        assert!(
            t_hanafi > t_std,
            "hanafi asr {t_hanafi} should be after standard {t_std}"
        );
    }

    #[test]
    fn elevation_widens_the_day() {
        let sea = GeoCoordinate::new(21.4225, 39.8262);
        let peak = GeoCoordinate::with_altitude(21.4225, 39.8262, 2000.0);
        let d = date(2024, 1, 1);
        let a = compute_schedule(&sea, d, tz(3), CalculationMethod::UmmAlQura, AsrJuristic::Standard)
            .unwrap();
        let b = compute_schedule(&peak, d, tz(3), CalculationMethod::UmmAlQura, AsrJuristic::Standard)
            .unwrap();
        assert!(
            b.event(Prayer::Sunrise).unwrap().time < a.event(Prayer::Sunrise).unwrap().time,
            "elevated sunrise should be earlier"
        );
        assert!(
            b.event(Prayer::Maghrib).unwrap().time > a.event(Prayer::Maghrib).unwrap().time,
            "elevated sunset should be later"
        );
    }

    #[test]
    fn night_length_sane() {
        let s = compute_schedule(
            &mecca(),
            date(2024, 1, 1),
            tz(3),
            CalculationMethod::UmmAlQura,
            AsrJuristic::Standard,
        )
        .unwrap();
        let night = approximate_night_length(&s).unwrap();
        assert!(night > Duration::hours(8) && night < Duration::hours(14));
    }
}
