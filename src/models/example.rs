//! Example Analysis
//!
//! A fixed, fully populated critique used by the "show example" flow so the
//! report view can be demonstrated without calling the analysis service.

use super::analysis::{AnalysisCategory, AnalysisResult, ArtistComparison, SuggestedGenre};

/// The canned example report for "Echoes in the Rain".
pub fn example_analysis() -> AnalysisResult {
    AnalysisResult {
        id: Some("example-001".to_string()),
        title: "Echoes in the Rain".to_string(),
        created_at: None,
        creativity: AnalysisCategory {
            score: 8.5,
            feedback: "The central metaphor of 'echoes in the rain' is compelling and original, \
                       creating a strong, moody atmosphere. The imagery used is vivid and \
                       consistently supports the song's theme of lingering memories."
                .to_string(),
        },
        emotional_impact: AnalysisCategory {
            score: 9.0,
            feedback: "The song excels at creating a poignant sense of nostalgia and loss. The \
                       listener can genuinely feel the weight of the past, particularly in the \
                       chorus and bridge, which are emotionally resonant."
                .to_string(),
        },
        lyricism: AnalysisCategory {
            score: 8.2,
            feedback: "The lyricism is strong, with good use of alliteration and assonance. The \
                       rhyme scheme is effective without feeling forced. Some phrases are \
                       exceptionally poetic, though a few lines in the second verse are slightly \
                       clichéd."
                .to_string(),
        },
        craftsmanship: AnalysisCategory {
            score: 7.8,
            feedback: "The song follows a classic verse-chorus structure that is well-executed \
                       and easy to follow. The transition into the bridge is particularly smooth \
                       and builds tension effectively before the final chorus."
                .to_string(),
        },
        audience_appeal: AnalysisCategory {
            score: 8.0,
            feedback: "The themes of love and memory are universally relatable, giving the song \
                       broad appeal. It would likely resonate well with fans of indie pop, folk, \
                       and singer-songwriter genres."
                .to_string(),
        },
        commercial_potential: AnalysisCategory {
            score: 7.5,
            feedback: "The song has a memorable chorus and a strong emotional core, which gives \
                       it commercial potential. It would be well-suited for placement in a film \
                       or TV show's emotional scene to enhance its reach."
                .to_string(),
        },
        overall_score: 8.2,
        first_impression: "A beautifully melancholic and atmospheric track that uses a powerful \
                           central metaphor to explore themes of memory and loss."
            .to_string(),
        strengths: vec![
            "Powerful and original central metaphor.".to_string(),
            "Strong emotional resonance and atmosphere.".to_string(),
            "Memorable and well-structured chorus.".to_string(),
        ],
        weaknesses: vec![
            "Some lyrical clichés in the second verse.".to_string(),
            "The melody, as described, might feel slightly repetitive without a dynamic \
             arrangement."
                .to_string(),
            "Could benefit from a more impactful and surprising bridge.".to_string(),
        ],
        suggestions: vec![
            "Revisit the second verse to replace phrases like 'ghost of a smile' with more \
             unique imagery."
                .to_string(),
            "Consider adding a dynamic instrumental swell or a change in rhythm during the \
             bridge to build more tension."
                .to_string(),
            "Experiment with a slightly more varied vocal delivery between the verses and \
             chorus to enhance the emotional arc."
                .to_string(),
        ],
        artist_comparisons: vec![
            ArtistComparison {
                artist: "Bon Iver".to_string(),
                reason: "For its atmospheric production and emotionally raw, poetic lyrics."
                    .to_string(),
            },
            ArtistComparison {
                artist: "The National".to_string(),
                reason: "Shares a similar melancholic tone and explores complex emotional \
                         landscapes."
                    .to_string(),
            },
            ArtistComparison {
                artist: "Phoebe Bridgers".to_string(),
                reason: "Due to the intimate storytelling and poignant, specific lyrical details."
                    .to_string(),
            },
        ],
        suggested_genres: vec![
            SuggestedGenre {
                name: "Indie Folk".to_string(),
                reason: "The song's lyrical depth and atmospheric quality fit well within this \
                         genre."
                    .to_string(),
            },
            SuggestedGenre {
                name: "Singer-Songwriter".to_string(),
                reason: "The personal and introspective nature of the lyrics is a hallmark of \
                         this genre."
                    .to_string(),
            },
            SuggestedGenre {
                name: "Ambient Pop".to_string(),
                reason: "With the right production, the song could lean into a more atmospheric, \
                         pop-oriented sound."
                    .to_string(),
            },
        ],
        final_verdict: "Overall, 'Echoes in the Rain' is a powerful and well-crafted song with \
                        significant artistic merit. Its greatest strength lies in its ability to \
                        create a deeply affecting mood and tell a relatable story through a \
                        unique and memorable metaphor. With a few minor lyrical refinements and \
                        a focus on dynamic arrangement, this song has the potential to be truly \
                        exceptional and connect with a wide audience."
            .to_string(),
    }
}
