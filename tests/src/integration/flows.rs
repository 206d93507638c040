//! # Integration Test Flows
//!
//! Connects fixture blocks the way an indexer does: outputs are registered
//! in the output index, then the block filter is computed through the
//! service.
//!
//! ## Flows Tested:
//!
//! 1. **Block filters per script mode**: all, taproot, taproot-noordinals
//! 2. **Golden vectors**: exact bytes for fixed descriptor sets and keys
//! 3. **Mempool filters**: keyed by txid, hex output
//! 4. **Independent blocks**: concurrent blocks share no filter state

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use golomb_filters::{
        FilterMetrics, GolombFilter, GolombFilterApi, GolombFilterConfig,
        GolombFilterConfigBuilder, GolombFilterService, InMemoryOutputIndex,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared_types::Block;

    use crate::fixtures::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Index the parent, then the block itself, as block connection does.
    fn connected_index(block: &Block) -> Arc<InMemoryOutputIndex> {
        let index = Arc::new(InMemoryOutputIndex::new());
        index.index_tx(&parent_tx());
        index.index_block(block);
        index
    }

    fn service(
        index: Arc<InMemoryOutputIndex>,
        p: u8,
        scripts: &str,
    ) -> GolombFilterService<InMemoryOutputIndex, FilterMetrics> {
        let config = GolombFilterConfigBuilder::new()
            .block_golomb_filter_p(p)
            .block_filter_scripts(scripts)
            .mempool_golomb_filter_p(16)
            .build()
            .expect("valid config");
        GolombFilterService::with_metrics(index, config, Arc::new(FilterMetrics::new()))
            .expect("valid config")
    }

    // =============================================================================
    // BLOCK FILTERS
    // =============================================================================

    #[test]
    fn test_block_filter_all_scripts_golden() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let service = service(connected_index(&block), 20, "");

        let filter = service.block_filter_hex(&block).unwrap();

        // {taproot aa, p2wpkh bb, p2pkh cc, taproot dd}
        assert_eq!(filter.as_deref(), Some("04076581c0f7dd61b4721a40"));
    }

    #[test]
    fn test_block_filter_taproot_golden() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let service = service(connected_index(&block), 20, "taproot");

        let filter = service.block_filter_hex(&block).unwrap();

        // {taproot aa, taproot dd}
        assert_eq!(filter.as_deref(), Some("0203b2c2b69700"));
    }

    #[test]
    fn test_block_filter_noordinals_keeps_plain_spends() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let taproot = service(connected_index(&block), 20, "taproot");
        let noordinals = service(connected_index(&block), 20, "taproot-noordinals");

        assert_eq!(
            taproot.block_filter(&block).unwrap(),
            noordinals.block_filter(&block).unwrap()
        );
    }

    #[test]
    fn test_block_filter_noordinals_drops_inscription_golden() {
        init_tracing();
        let block = fixture_block(inscription_witness());
        let service = service(connected_index(&block), 20, "taproot-noordinals");

        let filter = service.block_filter_hex(&block).unwrap();

        // Only the coinbase's taproot output survives
        assert_eq!(filter.as_deref(), Some("0101d960"));
    }

    #[test]
    fn test_block_filter_inscription_kept_without_exclusion() {
        init_tracing();
        let plain = fixture_block(key_path_witness());
        let inscribed = fixture_block(inscription_witness());

        for scripts in ["", "taproot"] {
            let a = service(connected_index(&plain), 20, scripts);
            let b = service(connected_index(&inscribed), 20, scripts);
            assert_eq!(
                a.block_filter(&plain).unwrap(),
                b.block_filter(&inscribed).unwrap(),
                "scripts = {:?}",
                scripts
            );
        }
    }

    #[test]
    fn test_block_filter_matches_direct_accumulation() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let service = service(connected_index(&block), 19, "");

        let mut direct = GolombFilter::new(19, "", BLOCK_HASH).unwrap();
        for script in [
            taproot_script(0xaa),
            p2wpkh_script(0xbb),
            taproot_script(0xdd),
            p2pkh_script(0xcc),
        ] {
            direct.add_addr_desc(&desc(script), None);
        }

        assert_eq!(service.block_filter(&block).unwrap(), direct.compute());
    }

    #[test]
    fn test_block_filter_repeatable() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let service = service(connected_index(&block), 20, "");

        let first = service.block_filter(&block).unwrap();
        let second = service.block_filter(&block).unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_filter_short_key_is_absent() {
        init_tracing();
        let mut block = fixture_block(key_path_witness());
        block.header.hash = "00112233".to_string();
        let metrics = Arc::new(FilterMetrics::new());
        let service = GolombFilterService::with_metrics(
            connected_index(&block),
            GolombFilterConfig::new(20, "", 0).unwrap(),
            metrics.clone(),
        )
        .unwrap();

        assert_eq!(service.block_filter(&block).unwrap(), None);
        assert_eq!(metrics.snapshot().invalid_keys, 1);
        assert_eq!(metrics.snapshot().filters_built, 0);
    }

    #[test]
    fn test_block_filter_from_json_block() {
        init_tracing();
        let block = fixture_block(key_path_witness());
        let json = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();

        let service = service(connected_index(&decoded), 20, "");
        assert_eq!(
            service.block_filter_hex(&decoded).unwrap().as_deref(),
            Some("04076581c0f7dd61b4721a40")
        );
    }

    // =============================================================================
    // MEMPOOL FILTERS
    // =============================================================================

    #[test]
    fn test_mempool_filter_golden() {
        init_tracing();
        let index = Arc::new(InMemoryOutputIndex::new());
        index.index_tx(&parent_tx());
        let service = service(index, 20, "");

        let filter = service.mempool_filter(&spend_tx(key_path_witness())).unwrap();

        // Keyed by the txid: {p2pkh cc, taproot dd, taproot aa}
        assert_eq!(filter, "0326e8d4048ef3e0");
    }

    #[test]
    fn test_mempool_filter_noordinals_inscription_is_empty() {
        init_tracing();
        let index = Arc::new(InMemoryOutputIndex::new());
        index.index_tx(&parent_tx());
        let service = service(index, 20, "taproot-noordinals");

        let filter = service.mempool_filter(&spend_tx(inscription_witness())).unwrap();
        assert_eq!(filter, "");
    }

    // =============================================================================
    // INDEPENDENT BLOCKS
    // =============================================================================

    #[test]
    fn test_concurrent_blocks_match_sequential() {
        init_tracing();
        let mut rng = StdRng::seed_from_u64(800_000);
        let blocks: Vec<Block> = (0..8)
            .map(|i| random_block(&mut rng, 800_000 + i, 200))
            .collect();

        let index = Arc::new(InMemoryOutputIndex::new());
        for block in &blocks {
            index.index_block(block);
        }
        let service = Arc::new(service(index, 20, "taproot"));

        let sequential: Vec<Option<Vec<u8>>> = blocks
            .iter()
            .map(|b| service.block_filter(b).unwrap())
            .collect();

        let concurrent: Vec<Option<Vec<u8>>> = thread::scope(|s| {
            let handles: Vec<_> = blocks
                .iter()
                .map(|b| {
                    let service = Arc::clone(&service);
                    s.spawn(move || service.block_filter(b).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
        assert!(sequential.iter().all(Option::is_some));
    }
}
