#[derive(Debug, Clone)]
pub enum Message {
    // === SETTINGS MESSAGES ===
    SettingsWizardHeader,
    SettingsSaved,
    SettingsInvalid(String),
    PromptTargetHours,
    PromptBreakMinutes,
    PromptPriorBalance,
    InvalidTargetHours,
    InvalidBreakMinutes,
    InvalidBalanceFormat,

    // === CALCULATION MESSAGES ===
    CalcHeader(String), // date
    UnparseableTime(String),
    MissingStartTime,

    // === WATCH MESSAGES ===
    WatchStarted(u64), // refresh interval in seconds
    WatchStopped,

    // === COUNTDOWN MESSAGES ===
    CountdownArmed(String), // target time
    CountdownAlreadyPast(String),
    CountdownStopped,
    NoCountdownTarget,
    OvertimeStarted,
}
