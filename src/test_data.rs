#[cfg(test)]
pub const POST_DATA_MDX: &str = r##"---
title: "How long do top podcasts run?"
publishedAt: '2025-01-12'
summary: Episode lengths across the top 1,000 shows
tags: podcasts, data
---

Most shows land between forty and sixty minutes.

<EpisodeLengthHistogram />

## The overall picture

<EpisodeLengthTable group="overall" />

### Daily shows

<DailyEpisodeLengthChart />

```bash
# count episodes per show
## not a heading either
```

### Weekly shows

<div className="table-wrap">
  <table>
    <thead>
      <tr><th>Cadence</th><th>Median&nbsp;length</th></tr>
    </thead>
    <tbody>
      <tr><td>Daily</td><td>38 <em>min</em></td></tr>
      <tr><td>Weekly</td><td>52 min</td></tr>
    </tbody>
  </table>
</div>

## Methodology

See [the about page](/about) or [the data](//cdn.example.com/data.csv).<br />
<hr />
That's the gist."##;

#[cfg(test)]
pub const HIDDEN_POST_MDX: &str = r##"---
title: Draft notes
publishedAt: 2024-11-02
summary: Not ready yet
tags: drafts
hidden: true
---

## Scratch

Nothing to see."##;
