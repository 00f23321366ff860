mod tests {
    use std::collections::{HashMap, VecDeque};

    use embassy_time::Instant;
    use myrtio_press_trigger::channel::TryReceiveError;
    use myrtio_press_trigger::{
        BusError, Hook, InputDriver, Level, LoveButton, ModeChannel, ModeCommand, SettingsStore,
        TriggerMode,
    };

    struct ScriptedDriver {
        connects: bool,
        levels: VecDeque<Level>,
    }

    impl ScriptedDriver {
        fn new(connects: bool, levels: &[Level]) -> Self {
            Self {
                connects,
                levels: levels.iter().copied().collect(),
            }
        }
    }

    impl InputDriver for ScriptedDriver {
        fn connect(&mut self) -> Result<(), BusError> {
            if self.connects { Ok(()) } else { Err(BusError) }
        }

        fn read_pin(&mut self, _pin: u8) -> Result<Level, BusError> {
            Ok(self.levels.pop_front().unwrap_or(Level::Low))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        bools: HashMap<String, bool>,
        words: HashMap<String, u16>,
    }

    impl SettingsStore for MemoryStore {
        fn read_bool(&self, key: &str) -> Option<bool> {
            self.bools.get(key).copied()
        }

        fn read_u16(&self, key: &str) -> Option<u16> {
            self.words.get(key).copied()
        }

        fn write_bool(&mut self, key: &str, value: bool) {
            self.bools.insert(key.to_owned(), value);
        }

        fn write_u16(&mut self, key: &str, value: u16) {
            self.words.insert(key.to_owned(), value);
        }
    }

    #[test]
    fn test_button_drives_mode_channel() {
        let channel: ModeChannel<4> = ModeChannel::new();
        let driver = ScriptedDriver::new(
            true,
            &[Level::Low, Level::High, Level::Low, Level::High],
        );

        let store = MemoryStore::default();
        let mut button = LoveButton::new(driver, 0, Default::default(), channel.sender());
        assert!(!button.load_config(&store));

        button.trigger_mut().config_mut().enabled = true;
        button.trigger_mut().config_mut().presses_to_love = 2;
        button.initialize();
        assert!(button.sampler().is_connected());

        for ms in [0u64, 100, 200, 300] {
            button.poll(Instant::from_millis(ms));
        }

        assert_eq!(button.trigger().mode(), TriggerMode::Love);
        assert_eq!(channel.try_receive(), Ok(ModeCommand::Activate(10)));
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_disconnected_button_stays_silent() {
        let channel: ModeChannel<4> = ModeChannel::new();
        let driver = ScriptedDriver::new(false, &[Level::Low, Level::High]);

        let mut button = LoveButton::new(driver, 0, Default::default(), channel.sender());
        button.trigger_mut().config_mut().enabled = true;
        button.initialize();

        for ms in [0u64, 100, 200, 300] {
            button.poll(Instant::from_millis(ms));
        }

        assert_eq!(button.trigger().press_count(), 0);
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_save_and_reload_config() {
        let channel: ModeChannel<4> = ModeChannel::new();
        let driver = ScriptedDriver::new(true, &[]);

        let mut button = LoveButton::new(driver, 0, Default::default(), channel.sender());
        button.trigger_mut().config_mut().enabled = true;
        button.trigger_mut().config_mut().presses_to_love = 4;

        let mut store = MemoryStore::default();
        button.save_config(&mut store);

        // A second instance sees the persisted settings in full.
        let other_driver = ScriptedDriver::new(true, &[]);
        let mut other = LoveButton::new(other_driver, 0, Default::default(), channel.sender());
        assert!(other.load_config(&store));
        assert!(other.trigger().config().enabled);
        assert_eq!(other.trigger().config().presses_to_love, 4);
    }
}
