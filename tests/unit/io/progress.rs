//! Tests for per-phase progress tracking

#[cfg(test)]
mod tests {
    use dungeontiles::io::progress::ProgressManager;
    use rayon::prelude::*;

    // Tests ProgressManager construction
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_new() {
        let pm = ProgressManager::new();

        assert_eq!(pm.phase_count(), 0);
        assert_eq!(pm.position(), 0);
        pm.advance();
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();

        assert_eq!(pm.phase_count(), 0);
    }

    // Tests each phase gets its own bar and counts restart
    // Verified by reusing the previous phase's bar
    #[test]
    fn test_phases() {
        let mut pm = ProgressManager::new();

        pm.start_phase("decode", 3);
        pm.advance();
        pm.advance();
        assert_eq!(pm.position(), 2);

        pm.start_phase("export", 5);
        assert_eq!(pm.phase_count(), 2);
        assert_eq!(pm.position(), 0);
        pm.finish();
    }

    // Tests bars can be advanced from worker threads
    // Verified by losing increments under contention
    #[test]
    fn test_concurrent_advance() {
        let mut pm = ProgressManager::new();
        pm.start_phase("decode", 100);

        (0..100).into_par_iter().for_each(|_| pm.advance());

        assert_eq!(pm.position(), 100);
        pm.finish();
    }
}
